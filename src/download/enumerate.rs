//! Clip enumeration over the cursor-paginated `/clips` listing.

use futures::stream::{self, Stream, TryStreamExt};

use crate::api::{Clip, HelixClient, Identity, CLIP_PAGE_SIZE};
use crate::error::{Error, Result};

enum PageCursor {
    Start,
    After(String),
    Done,
}

/// Lazily fetch clip pages for a broadcaster, in listing order.
///
/// Any failure on the first page is reported as [`Error::ClipListing`].
pub fn clip_pages<'a>(
    api: &'a HelixClient,
    broadcaster_id: &'a str,
) -> impl Stream<Item = Result<Vec<Clip>>> + 'a {
    stream::try_unfold(PageCursor::Start, move |cursor| async move {
        let after = match &cursor {
            PageCursor::Start => None,
            PageCursor::After(after) => Some(after.as_str()),
            PageCursor::Done => return Ok(None),
        };

        let page = match api.get_clips_page(broadcaster_id, after, CLIP_PAGE_SIZE).await {
            Ok(page) => page,
            Err(e @ Error::ClipListing(_)) => return Err(e),
            Err(e) if after.is_none() => return Err(Error::ClipListing(e.to_string())),
            Err(e) => return Err(e),
        };

        tracing::debug!(
            "Fetched {} clips (cursor: {:?})",
            page.data.len(),
            page.pagination.next_cursor()
        );

        let next = match page.pagination.next_cursor() {
            Some(next) if Some(next) == after => {
                tracing::warn!("Clip listing returned the same cursor twice, stopping");
                PageCursor::Done
            }
            Some(next) => PageCursor::After(next.to_string()),
            None => PageCursor::Done,
        };

        Ok(Some((page.data, next)))
    })
}

/// Fetch every clip of a channel, draining all pages.
pub async fn enumerate_clips(api: &HelixClient, identity: &Identity) -> Result<Vec<Clip>> {
    let pages = clip_pages(api, &identity.id);
    futures::pin_mut!(pages);

    let mut clips = Vec::new();
    while let Some(page) = pages.try_next().await? {
        clips.extend(page);
    }

    tracing::info!("Found {} clips for {}", clips.len(), identity.name);
    Ok(clips)
}
