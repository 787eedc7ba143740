use crate::models::CustomerRecord;

/// Filters the store snapshot the way the dashboard table does: a non-empty
/// search term keeps a record iff its lower-cased name or identity card
/// number contains the lower-cased term; a status filter other than "All"
/// keeps records whose status matches it case-insensitively. Both compose
/// with AND and the snapshot order is preserved.
pub fn filter_records<'a>(
    records: &'a [CustomerRecord],
    search_term: &str,
    status_filter: Option<&str>,
) -> Vec<&'a CustomerRecord> {
    let term = search_term.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            if !term.is_empty() {
                let name = record.full_name.to_lowercase();
                let id = record.identity_card_number.to_lowercase();
                if !name.contains(&term) && !id.contains(&term) {
                    return false;
                }
            }

            match status_filter {
                None => true,
                Some(filter) if filter.eq_ignore_ascii_case("all") => true,
                Some(filter) => record.booking_status.as_str().eq_ignore_ascii_case(filter),
            }
        })
        .collect()
}
