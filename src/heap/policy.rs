//! Placement policies: the rules for choosing among fitting free blocks.

use super::buffer::ChainIter;

/// Search strategy used when looking for a free block to satisfy a request.
///
/// All three strategies scan the chain exactly once and consider only free
/// blocks at least as large as the aligned request total. They never mutate
/// the chain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Take the first qualifying block encountered.
    #[default]
    First,
    /// Take the smallest qualifying block; ties go to the lowest address.
    Best,
    /// Take the largest qualifying block; ties go to the lowest address.
    Worst,
}

/// Find a free block of at least `total` bytes, returning its header offset.
pub(crate) fn find_fit<const N: usize>(
    chain: ChainIter<'_, N>,
    strategy: Strategy,
    total: usize,
) -> Option<usize> {
    let mut fits = chain.filter(|(_, header)| header.is_free() && header.size >= total);

    match strategy {
        Strategy::First => fits.next().map(|(offset, _)| offset),
        // `min_by_key` keeps the first of equally small candidates, which is
        // the lowest address in a front-to-back scan.
        Strategy::Best => fits
            .min_by_key(|(_, header)| header.size)
            .map(|(offset, _)| offset),
        // `max_by_key` would keep the *last* of equal candidates, so the
        // largest block is tracked by hand with a strictly-greater update.
        Strategy::Worst => {
            let mut worst: Option<(usize, usize)> = None;
            for (offset, header) in fits {
                match worst {
                    Some((_, size)) if header.size <= size => {}
                    _ => worst = Some((offset, header.size)),
                }
            }
            worst.map(|(offset, _)| offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::buffer::Buffer;
    use super::super::header::Header;
    use super::{find_fit, Strategy};

    /// Chain of four blocks: used(64), free(128), used(64), free(96).
    fn fragmented_buffer() -> Buffer<512> {
        let mut buffer = Buffer::<512>::new();
        buffer.write_header(0, Header::used(64, Some(64)));
        buffer.write_header(64, Header::free(128, Some(192)));
        buffer.write_header(192, Header::used(64, Some(256)));
        buffer.write_header(256, Header::free(96, None));
        buffer
    }

    #[test]
    fn first_fit_stops_at_the_first_candidate() {
        let buffer = fragmented_buffer();
        assert_eq!(find_fit(buffer.chain(Some(0)), Strategy::First, 96), Some(64));
    }

    #[test]
    fn best_fit_prefers_the_smallest_candidate() {
        let buffer = fragmented_buffer();
        assert_eq!(find_fit(buffer.chain(Some(0)), Strategy::Best, 96), Some(256));
    }

    #[test]
    fn worst_fit_prefers_the_largest_candidate() {
        let buffer = fragmented_buffer();
        assert_eq!(find_fit(buffer.chain(Some(0)), Strategy::Worst, 48), Some(64));
    }

    #[test]
    fn ties_resolve_to_the_lowest_address() {
        let mut buffer = Buffer::<512>::new();
        buffer.write_header(0, Header::free(96, Some(96)));
        buffer.write_header(96, Header::free(96, None));

        assert_eq!(find_fit(buffer.chain(Some(0)), Strategy::Best, 48), Some(0));
        assert_eq!(find_fit(buffer.chain(Some(0)), Strategy::Worst, 48), Some(0));
    }

    #[test]
    fn no_candidate_reports_not_found() {
        let buffer = fragmented_buffer();
        for strategy in [Strategy::First, Strategy::Best, Strategy::Worst] {
            assert_eq!(find_fit(buffer.chain(Some(0)), strategy, 256), None);
        }
    }

    #[test]
    fn used_blocks_are_never_candidates() {
        let mut buffer = Buffer::<256>::new();
        buffer.write_header(0, Header::used(256, None));
        assert_eq!(find_fit(buffer.chain(Some(0)), Strategy::First, 48), None);
    }
}
