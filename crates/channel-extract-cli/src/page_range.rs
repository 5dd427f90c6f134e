/// Parse a 1-based page selection such as `"1,3-5"` into sorted, deduplicated
/// 0-based page indices.
///
/// Empty items are skipped. Page 0, reversed ranges, and pages past
/// `page_count` are errors.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, String> {
    let mut indices = Vec::new();

    for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (first, last) = match item.split_once('-') {
            Some((start, end)) => (page_number(start, page_count)?, page_number(end, page_count)?),
            None => {
                let page = page_number(item, page_count)?;
                (page, page)
            }
        };

        if first > last {
            return Err(format!("invalid page range '{item}' (start is after end)"));
        }

        indices.extend((first..=last).map(|page| page - 1));
    }

    indices.sort_unstable();
    indices.dedup();
    Ok(indices)
}

fn page_number(raw: &str, page_count: usize) -> Result<usize, String> {
    let raw = raw.trim();
    let page: usize = raw
        .parse()
        .map_err(|_| format!("invalid page number: '{raw}'"))?;

    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    if page > page_count {
        return Err(format!(
            "page {page} exceeds document page count ({page_count})"
        ));
    }
    Ok(page)
}
