//! 分页栏

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::models::PageLimit;

/// 当前页两侧始终显示的页数
const WINDOW_DELTA: u32 = 2;

/// 分页栏中的一个位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

/// 分页栏输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u32,
    pub total: u32,
    pub limit: PageLimit,
}

/// 计算显示的页码窗口
///
/// 总是显示首页、末页以及当前页 ±2 的页码；相邻显示页之间只缺一页时
/// 直接显示该页，缺口更大时折叠为一个省略号。
pub fn pagination_window(page: u32, total: u32) -> Vec<PageSlot> {
    let total = total.max(1);
    let page = page.clamp(1, total);

    let mut shown = BTreeSet::from([1, total]);
    shown.extend(page.saturating_sub(WINDOW_DELTA).max(1)..=(page + WINDOW_DELTA).min(total));

    let mut slots = Vec::with_capacity(shown.len() + 2);
    let mut last: Option<u32> = None;
    for p in shown {
        if let Some(prev) = last {
            match p - prev {
                1 => {}
                2 => slots.push(PageSlot::Page(prev + 1)),
                _ => slots.push(PageSlot::Ellipsis),
            }
        }
        slots.push(PageSlot::Page(p));
        last = Some(p);
    }

    slots
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

/// 渲染分页栏标记
pub fn render_pagination(view: PaginationView) -> String {
    let PaginationView { page, total, limit } = view;
    let at_start = page <= 1;
    let at_end = page >= total;

    let mut html = String::new();
    html.push_str(r#"<div class="pagination">"#);
    let _ = write!(
        html,
        r#"<button class="pagination-start" id="start-page"{}>Start</button>"#,
        disabled(at_start)
    );
    let _ = write!(
        html,
        r#"<button class="pagination-button" id="prev-page"{}>Previous</button>"#,
        disabled(at_start)
    );

    for slot in pagination_window(page, total) {
        match slot {
            PageSlot::Page(p) => {
                let _ = write!(
                    html,
                    r#"<button class="pagination-page-button" data-page="{p}" id="page-{p}"{}>{p}</button>"#,
                    disabled(p == page)
                );
            }
            PageSlot::Ellipsis => html.push_str(r#"<span class="pagination-ellipsis">...</span>"#),
        }
    }

    let _ = write!(
        html,
        r#"<span class="pagination-info">Page {} of {}</span>"#,
        page, total
    );
    let _ = write!(
        html,
        r#"<button class="pagination-button" id="next-page"{}>Next</button>"#,
        disabled(at_end)
    );
    let _ = write!(
        html,
        r#"<button class="pagination-end" id="end-page"{}>End</button>"#,
        disabled(at_end)
    );

    html.push_str(r#"<select id="select-page-count">"#);
    for option in PageLimit::allowed() {
        let selected = if option == limit { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{v}"{selected}>{v}</option>"#,
            v = option.get()
        );
    }
    html.push_str("</select></div>");

    html
}

#[cfg(test)]
mod tests {
    use super::PageSlot::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_window_table() {
        let cases: &[(u32, u32, &[PageSlot])] = &[
            (1, 1, &[Page(1)]),
            (1, 2, &[Page(1), Page(2)]),
            (1, 5, &[Page(1), Page(2), Page(3), Page(4), Page(5)]),
            (1, 10, &[Page(1), Page(2), Page(3), Ellipsis, Page(10)]),
            (3, 10, &[Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]),
            (
                5,
                10,
                &[Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)],
            ),
            (
                6,
                10,
                &[Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)],
            ),
            (10, 10, &[Page(1), Ellipsis, Page(8), Page(9), Page(10)]),
            (
                50,
                100,
                &[Page(1), Ellipsis, Page(48), Page(49), Page(50), Page(51), Page(52), Ellipsis, Page(100)],
            ),
            (4, 7, &[Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]),
        ];

        for (page, total, expected) in cases {
            assert_eq!(
                pagination_window(*page, *total),
                expected.to_vec(),
                "page={} total={}",
                page,
                total
            );
        }
    }

    #[test]
    fn test_edge_controls_disabled_at_bounds() {
        let first = render_pagination(PaginationView {
            page: 1,
            total: 3,
            limit: PageLimit::DEFAULT,
        });
        assert!(first.contains(r#"id="start-page" disabled"#));
        assert!(first.contains(r#"id="prev-page" disabled"#));
        assert!(first.contains(r#"<button class="pagination-button" id="next-page">"#));
        assert!(first.contains(r#"id="page-1" disabled"#));

        let last = render_pagination(PaginationView {
            page: 3,
            total: 3,
            limit: PageLimit::DEFAULT,
        });
        assert!(last.contains(r#"id="next-page" disabled"#));
        assert!(last.contains(r#"id="end-page" disabled"#));
        assert!(last.contains(r#"<button class="pagination-start" id="start-page">"#));
        assert!(last.contains("Page 3 of 3"));
    }

    #[test]
    fn test_single_page_disables_everything() {
        let html = render_pagination(PaginationView {
            page: 1,
            total: 1,
            limit: PageLimit::DEFAULT,
        });
        for id in ["start-page", "prev-page", "next-page", "end-page"] {
            assert!(html.contains(&format!(r#"id="{}" disabled"#, id)), "{}", id);
        }
    }

    #[test]
    fn test_limit_selected() {
        let html = render_pagination(PaginationView {
            page: 1,
            total: 1,
            limit: PageLimit::try_from(50).unwrap(),
        });
        assert!(html.contains(r#"<option value="50" selected>50</option>"#));
        assert!(html.contains(r#"<option value="10">10</option>"#));
    }
}
