/// Pack formatted report lines into transport-size-bounded chunks.
///
/// Greedily accumulates consecutive items, joined with `'\n'`, while the
/// chunk stays within `limit`. An item whose own length meets or exceeds the
/// limit is passed through oversized in a chunk of its own rather than
/// stalling the loop: every iteration consumes exactly one item, so the
/// renderer terminates for any finite input. Item order is preserved and no
/// item is dropped or truncated.
#[must_use]
pub fn chunk_messages<S: AsRef<str>>(items: &[S], limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Option<String> = None;

    for item in items {
        let item = item.as_ref();
        current = Some(match current.take() {
            None => item.to_string(),
            Some(chunk) if chunk.len() + 1 + item.len() > limit => {
                chunks.push(chunk);
                item.to_string()
            }
            Some(mut chunk) => {
                chunk.push('\n');
                chunk.push_str(item);
                chunk
            }
        });
    }

    chunks.extend(current);
    chunks
}
