// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Page-number pagination over upstream list endpoints.
//!
//! The upstream API hands out zero-based pages and never says how many
//! there are. We keep asking until a page comes back short. A full page is
//! assumed to hold exactly [`FULL_PAGE_SIZE`] items; that is observed
//! behavior, not a documented contract, so if upstream ever serves smaller
//! full pages the walk stops early and under-fetches.

use std::future::Future;

/// Items in a full upstream page
pub const FULL_PAGE_SIZE: usize = 100;

/// Whether a page of `len` items is the last one worth asking past.
pub fn is_final_page(len: usize) -> bool {
    len < FULL_PAGE_SIZE
}

/// Fetch pages `0, 1, 2, ...` and concatenate them.
///
/// Stops when `fetch` yields `None` (no usable payload), or the page is
/// final per [`is_final_page`] (which covers empty pages). Returns the
/// items together with the number of pages requested.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> (Vec<T>, u32)
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Option<Vec<T>>>,
{
    let mut items = Vec::new();
    let mut page = 0u32;

    loop {
        let batch = fetch(page).await;
        page += 1;

        let Some(batch) = batch else {
            break;
        };
        let len = batch.len();
        items.extend(batch);

        if is_final_page(len) {
            break;
        }
    }

    (items, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(sizes: &'static [usize]) -> impl FnMut(u32) -> std::future::Ready<Option<Vec<usize>>> {
        move |page| {
            let page = page as usize;
            std::future::ready(sizes.get(page).map(|&n| {
                let start = page * FULL_PAGE_SIZE;
                (start..start + n).collect()
            }))
        }
    }

    #[test]
    fn test_final_page_threshold() {
        assert!(is_final_page(0));
        assert!(is_final_page(99));
        assert!(!is_final_page(100));
    }

    #[tokio::test]
    async fn test_stops_after_short_page() {
        let (items, requested) = collect_pages(pages(&[100, 100, 50, 100])).await;
        assert_eq!(items.len(), 250);
        assert_eq!(requested, 3);
        assert_eq!(items.first(), Some(&0));
        assert_eq!(items.last(), Some(&249));
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let (items, requested) = collect_pages(pages(&[0, 100])).await;
        assert!(items.is_empty());
        assert_eq!(requested, 1);
    }

    #[tokio::test]
    async fn test_exact_multiple_needs_one_empty_page() {
        let (items, requested) = collect_pages(pages(&[100, 100, 0])).await;
        assert_eq!(items.len(), 200);
        assert_eq!(requested, 3);
    }

    #[tokio::test]
    async fn test_missing_payload_keeps_earlier_pages() {
        // Third page has no payload at all (e.g. a failed request)
        let (items, requested) = collect_pages(pages(&[100, 100])).await;
        assert_eq!(items.len(), 200);
        assert_eq!(requested, 3);
    }
}
