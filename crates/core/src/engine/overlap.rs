/// Whether `[start, end)` collides with an existing `[existing_start, existing_end)`.
///
/// Three clauses, any one of which is a hit:
///
/// - the request starts inside the existing span,
/// - the request ends inside the existing span,
/// - the existing span lies entirely within the request.
///
/// Touching endpoints (`existing_end == start` or `existing_start == end`) do not
/// count. Used for both appointment and break collisions, on timestamps as well as
/// minute offsets.
pub fn overlaps<T: PartialOrd>(existing_start: T, existing_end: T, start: T, end: T) -> bool {
    let starts_inside = existing_start <= start && existing_end > start;
    let ends_inside = existing_start < end && existing_end >= end;
    let contains_existing = existing_start >= start && existing_end <= end;

    starts_inside || ends_inside || contains_existing
}
