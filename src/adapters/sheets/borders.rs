use google_sheets4::api::{Border, Color, GridRange, Request, UpdateBordersRequest};

const RULE_STYLE: &str = "DASHED";
const RULE_WIDTH: i32 = 4;

/// The two border requests that leave a single dashed rule at `rule_row`.
/// When `first_row == rule_row` the rule range is empty and only the clearing applies.
pub fn horizontal_rule_requests(sheet_id: Option<i32>, first_row: i32, rule_row: i32) -> Vec<Request> {
    let rule = Request {
        update_borders: Some(UpdateBordersRequest {
            range: Some(GridRange {
                sheet_id,
                start_row_index: Some(first_row),
                end_row_index: Some(rule_row),
                ..Default::default()
            }),
            bottom: Some(Border {
                style: Some(RULE_STYLE.to_string()),
                width: Some(RULE_WIDTH),
                color: Some(Color {
                    red: Some(1.0),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    let clear_below = Request {
        update_borders: Some(UpdateBordersRequest {
            range: Some(GridRange {
                sheet_id,
                start_row_index: Some(rule_row),
                ..Default::default()
            }),
            inner_horizontal: Some(Border {
                style: Some("NONE".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    vec![rule, clear_below]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(requests: &[Request]) -> Vec<&GridRange> {
        requests
            .iter()
            .map(|request| {
                request
                    .update_borders
                    .as_ref()
                    .and_then(|borders| borders.range.as_ref())
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_rule_then_clear() {
        let requests = horizontal_rule_requests(None, 1, 4);
        assert_eq!(requests.len(), 2);

        let rule = requests[0].update_borders.as_ref().unwrap();
        let range = rule.range.as_ref().unwrap();
        assert_eq!(range.start_row_index, Some(1));
        assert_eq!(range.end_row_index, Some(4));
        assert_eq!(range.sheet_id, None);
        let bottom = rule.bottom.as_ref().unwrap();
        assert_eq!(bottom.style.as_deref(), Some("DASHED"));
        assert_eq!(bottom.width, Some(4));
        assert_eq!(bottom.color.as_ref().and_then(|c| c.red), Some(1.0));
        assert!(rule.inner_horizontal.is_none());

        let clear = requests[1].update_borders.as_ref().unwrap();
        let range = clear.range.as_ref().unwrap();
        assert_eq!(range.start_row_index, Some(4));
        assert_eq!(range.end_row_index, None);
        assert_eq!(
            clear.inner_horizontal.as_ref().and_then(|b| b.style.as_deref()),
            Some("NONE")
        );
        assert!(clear.bottom.is_none());
    }

    #[test]
    fn test_both_requests_target_the_page() {
        let requests = horizontal_rule_requests(Some(1_234_567), 0, 3);
        for range in ranges(&requests) {
            assert_eq!(range.sheet_id, Some(1_234_567));
        }
    }

    #[test]
    fn test_equal_rows_leave_an_empty_rule_range() {
        let requests = horizontal_rule_requests(None, 2, 2);
        let ranges = ranges(&requests);
        assert_eq!(ranges[0].start_row_index, ranges[0].end_row_index);
        assert_eq!(ranges[1].start_row_index, Some(2));
    }
}
