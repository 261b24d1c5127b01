/// Store-assigned IDs look like `T-014`: a collection prefix, a dash, and
/// a zero-padded number.
///
/// Assignment scans for the highest number currently in use, so deleting
/// an item below the maximum never causes its ID to be handed out again.
pub fn next_id<'a, I>(existing: I, prefix: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix_dash = format!("{}-", prefix);
    let mut max = 0usize;
    for id in existing {
        if let Some(num_str) = id.strip_prefix(&prefix_dash) {
            if let Ok(n) = num_str.parse::<usize>() {
                if n > max {
                    max = n;
                }
            }
        }
    }
    format!("{}-{:03}", prefix, max + 1)
}
