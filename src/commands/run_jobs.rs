use crate::thumbnail::resize_image;
use crate::types::{RunSummary, ThumbnailJob};

// ジョブを先頭から順番に処理（1件の失敗で中断しない）
pub fn run_jobs(jobs: &[ThumbnailJob]) -> RunSummary {
    let mut summary = RunSummary::default();

    for job in jobs {
        log::debug!(
            "処理開始: {} -> {}",
            job.input_path.display(),
            job.output_path.display()
        );
        summary.outcomes.push(resize_image(job));
    }

    log::info!(
        "処理完了: 成功 {} 件 / 失敗 {} 件",
        summary.succeeded(),
        summary.failed()
    );
    for input in summary.failed_inputs() {
        log::warn!("失敗した入力: {}", input.display());
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("pointer.png");
        RgbaImage::from_pixel(256, 256, Rgba([200, 100, 50, 255])).save(&good).unwrap();

        let jobs = vec![
            ThumbnailJob::new(dir.path().join("missing.png"), dir.path().join("a.png")),
            ThumbnailJob::new(&good, dir.path().join("pointer_small.png")),
        ];

        let summary = run_jobs(&jobs);

        assert_eq!(summary.outcomes.len(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.succeeded(), 1);
        assert!(!summary.outcomes[0].is_success());
        assert!(summary.outcomes[1].is_success());
        assert_eq!(summary.failed_inputs(), vec![dir.path().join("missing.png").as_path()]);
        assert!(dir.path().join("pointer_small.png").exists());
        assert!(!dir.path().join("a.png").exists());
    }

    #[test]
    fn empty_job_list_is_noop() {
        let summary = run_jobs(&[]);
        assert!(summary.outcomes.is_empty());
        assert_eq!(summary.failed(), 0);
    }
}
