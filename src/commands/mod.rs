pub mod run_jobs;
