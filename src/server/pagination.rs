pub const QUESTIONS_PER_PAGE: usize = 10;

/// Window `[(page - 1) * 10, page * 10)` of `items`. Pages below one and pages past the end
/// are empty.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .map(|p| p.saturating_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
