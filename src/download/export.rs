//! Sequential clip export: download each video, then record it in the ledger.

use std::path::Path;

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::{Clip, HelixClient};
use crate::config::FailurePolicy;
use crate::download::state::ExportSummary;
use crate::error::{Error, Result};
use crate::fs::{ExportLayout, Ledger, LedgerRow};
use crate::media::ClipMedia;
use crate::output::{create_item_bar, print_warning};

/// Export pipeline settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub on_error: FailurePolicy,
    pub show_progress: bool,
}

/// Export `clips` into `layout`, in order.
///
/// The directory tree and a fresh ledger are created first. Each clip is downloaded to
/// `videos/<id>.mp4` and then appended to the ledger, so a ledger row always refers to a
/// complete file. With [`FailurePolicy::FailFast`] the first failed download ends the export.
pub async fn export_clips(
    api: &HelixClient,
    layout: &ExportLayout,
    clips: &[Clip],
    options: ExportOptions,
) -> Result<ExportSummary> {
    let progress = if options.show_progress {
        create_item_bar(clips.len() as u64, "Downloading clips")
    } else {
        ProgressBar::hidden()
    };

    export_with_progress(api, layout, clips, options.on_error, &progress).await
}

async fn export_with_progress(
    api: &HelixClient,
    layout: &ExportLayout,
    clips: &[Clip],
    on_error: FailurePolicy,
    progress: &ProgressBar,
) -> Result<ExportSummary> {
    layout.create().await?;
    let mut ledger = Ledger::create(&layout.ledger_path())?;
    let mut summary = ExportSummary::new(layout.root().to_path_buf());

    for clip in clips {
        // Progress counts attempts, not completions
        progress.inc(1);
        summary.start_clip();

        match export_clip(api, layout, clip).await {
            Ok((file_name, bytes)) => {
                ledger.append(&LedgerRow::for_clip(clip, &file_name))?;
                summary.record_download(bytes);
            }
            Err(e) => match on_error {
                FailurePolicy::FailFast => {
                    progress.abandon();
                    return Err(e);
                }
                FailurePolicy::Skip => {
                    tracing::warn!("Skipping clip {}: {}", clip.id, e);
                    progress.suspend(|| {
                        print_warning(&format!("Skipping clip {} ({}): {}", clip.id, clip.title, e))
                    });
                    summary.record_failure();
                }
            },
        }
    }

    progress.finish();
    debug_assert_eq!(ledger.rows(), summary.downloaded);

    Ok(summary)
}

/// Download one clip's video. Returns the file name and byte count.
async fn export_clip(
    api: &HelixClient,
    layout: &ExportLayout,
    clip: &Clip,
) -> Result<(String, u64)> {
    let media = ClipMedia::from_clip(clip)?;
    let output_path = layout.video_path(&media.file_name)?;

    tracing::debug!("Downloading clip {} from {}", clip.id, media.download_url);

    let bytes = download_direct(api, &media.download_url, &output_path).await?;
    Ok((media.file_name, bytes))
}

/// Stream a URL into a file, overwriting it.
///
/// The file is only touched once the server has answered with success; a file this
/// call truncated is removed again if streaming fails.
async fn download_direct(api: &HelixClient, url: &str, output_path: &Path) -> Result<u64> {
    let response = api.download_file(url).await?;

    let file = File::create(output_path).await?;
    match stream_to_file(response, file).await {
        Ok(downloaded) => Ok(downloaded),
        Err(e) => {
            if let Err(remove_err) = tokio::fs::remove_file(output_path).await {
                tracing::debug!(
                    "Could not remove partial file {}: {}",
                    output_path.display(),
                    remove_err
                );
            }
            Err(e)
        }
    }
}

async fn stream_to_file(response: Response, mut file: File) -> Result<u64> {
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
    }

    file.flush().await?;

    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AccessToken;
    use chrono::{TimeZone, Utc};
    use reqwest::Client;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> HelixClient {
        HelixClient::new(
            Client::new(),
            &server.uri(),
            "cid".to_string(),
            AccessToken {
                token: "tok".to_string(),
                expires_in: None,
            },
        )
    }

    fn clip(server: &MockServer, id: &str) -> Clip {
        Clip {
            id: id.to_string(),
            title: format!("T-{}", id),
            views: 5,
            creator_display_name: "foo".to_string(),
            creation_date: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
            thumbnail_url: format!("{}/{}-preview-480x272.jpg", server.uri(), id),
            url: None,
            broadcaster_name: None,
            duration: None,
        }
    }

    async fn serve_video(server: &MockServer, id: &str, body: &[u8]) {
        Mock::given(method("GET"))
            .and(path(format!("/{}.mp4", id)))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
            .mount(server)
            .await;
    }

    fn options(on_error: FailurePolicy) -> ExportOptions {
        ExportOptions {
            on_error,
            show_progress: false,
        }
    }

    #[tokio::test]
    async fn test_exports_files_and_ledger_in_order() {
        let server = MockServer::start().await;
        serve_video(&server, "a", b"video-a").await;
        serve_video(&server, "b", b"video-bb").await;

        let dir = TempDir::new().unwrap();
        let layout = ExportLayout::new(dir.path(), "foo").unwrap();
        let clips = vec![clip(&server, "b"), clip(&server, "a")];

        let summary = export_clips(
            &api_for(&server),
            &layout,
            &clips,
            options(FailurePolicy::FailFast),
        )
        .await
        .unwrap();

        assert_eq!(summary.downloaded, 2);
        assert_eq!(summary.bytes, 15);
        assert_eq!(std::fs::read(layout.videos_dir().join("a.mp4")).unwrap(), b"video-a");
        assert_eq!(std::fs::read(layout.videos_dir().join("b.mp4")).unwrap(), b"video-bb");

        let ledger = std::fs::read_to_string(layout.ledger_path()).unwrap();
        let files: Vec<&str> = ledger
            .lines()
            .skip(1)
            .map(|l| l.split(';').next().unwrap())
            .collect();
        assert_eq!(files, vec!["\"b.mp4\"", "\"a.mp4\""]);
    }

    #[tokio::test]
    async fn test_existing_video_is_overwritten() {
        let server = MockServer::start().await;
        serve_video(&server, "a", b"new").await;

        let dir = TempDir::new().unwrap();
        let layout = ExportLayout::new(dir.path(), "foo").unwrap();
        layout.create().await.unwrap();
        std::fs::write(layout.videos_dir().join("a.mp4"), b"old and longer").unwrap();

        export_clips(
            &api_for(&server),
            &layout,
            &[clip(&server, "a")],
            options(FailurePolicy::FailFast),
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read(layout.videos_dir().join("a.mp4")).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_fail_fast_stops_at_first_failure() {
        let server = MockServer::start().await;
        serve_video(&server, "a", b"video-a").await;
        serve_video(&server, "c", b"video-c").await;

        let dir = TempDir::new().unwrap();
        let layout = ExportLayout::new(dir.path(), "foo").unwrap();
        let clips = vec![clip(&server, "a"), clip(&server, "b"), clip(&server, "c")];

        let result = export_clips(
            &api_for(&server),
            &layout,
            &clips,
            options(FailurePolicy::FailFast),
        )
        .await;

        assert!(matches!(result, Err(Error::Download(_))));
        assert!(layout.videos_dir().join("a.mp4").exists());
        assert!(!layout.videos_dir().join("b.mp4").exists());
        assert!(!layout.videos_dir().join("c.mp4").exists());

        let ledger = std::fs::read_to_string(layout.ledger_path()).unwrap();
        assert_eq!(ledger.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_skip_continues_without_ledger_row() {
        let server = MockServer::start().await;
        serve_video(&server, "a", b"video-a").await;
        serve_video(&server, "c", b"video-c").await;

        let dir = TempDir::new().unwrap();
        let layout = ExportLayout::new(dir.path(), "foo").unwrap();
        let clips = vec![clip(&server, "a"), clip(&server, "b"), clip(&server, "c")];

        let summary = export_clips(
            &api_for(&server),
            &layout,
            &clips,
            options(FailurePolicy::Skip),
        )
        .await
        .unwrap();

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.downloaded, 2);
        assert_eq!(summary.failed, 1);

        let ledger = std::fs::read_to_string(layout.ledger_path()).unwrap();
        assert_eq!(ledger.lines().count(), 3);
        assert!(!ledger.contains("\"b.mp4\""));
    }

    #[tokio::test]
    async fn test_no_clips_writes_header_only() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let layout = ExportLayout::new(dir.path(), "foo").unwrap();

        let summary = export_clips(
            &api_for(&server),
            &layout,
            &[],
            options(FailurePolicy::FailFast),
        )
        .await
        .unwrap();

        assert_eq!(summary.attempted, 0);
        assert!(layout.videos_dir().is_dir());
        assert_eq!(
            std::fs::read_to_string(layout.ledger_path()).unwrap().lines().count(),
            1
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_video() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.mp4"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let layout = ExportLayout::new(dir.path(), "foo").unwrap();
        layout.create().await.unwrap();
        let existing = layout.videos_dir().join("a.mp4");
        std::fs::write(&existing, b"previous good video").unwrap();

        for on_error in [FailurePolicy::FailFast, FailurePolicy::Skip] {
            let result =
                export_clips(&api_for(&server), &layout, &[clip(&server, "a")], options(on_error))
                    .await;
            if on_error == FailurePolicy::FailFast {
                assert!(result.is_err());
            }
            assert_eq!(std::fs::read(&existing).unwrap(), b"previous good video");
        }
    }

    #[tokio::test]
    async fn test_progress_advances_before_each_download() {
        let server = MockServer::start().await;
        serve_video(&server, "a", b"video-a").await;

        let dir = TempDir::new().unwrap();
        let layout = ExportLayout::new(dir.path(), "foo").unwrap();
        let clips = vec![clip(&server, "a"), clip(&server, "b"), clip(&server, "c")];
        let progress = ProgressBar::hidden();
        progress.set_length(clips.len() as u64);

        let result = export_with_progress(
            &api_for(&server),
            &layout,
            &clips,
            FailurePolicy::FailFast,
            &progress,
        )
        .await;

        assert!(result.is_err());
        // The failing second clip was already counted
        assert_eq!(progress.position(), 2);
    }
}
