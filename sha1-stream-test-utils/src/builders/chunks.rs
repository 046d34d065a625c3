//! Partitioning inputs into write-sized chunks

/// How to cut an input into consecutive chunks
///
/// Concatenating the chunks returned by [`ChunkPlan::split`] always yields the
/// original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkPlan {
    /// The whole input as a single chunk
    Whole,
    /// Fixed-size chunks, the last one possibly shorter
    Every(usize),
    /// Explicit chunk lengths in order; whatever is left becomes the last chunk.
    /// Zero lengths produce empty chunks.
    Sizes(Vec<usize>),
    /// Cut positions into the input, in any order; out-of-range positions are
    /// clamped to the input length
    Cuts(Vec<usize>),
}

impl ChunkPlan {
    /// Fixed-size chunks; a size of zero is treated as one
    pub fn every(size: usize) -> Self {
        Self::Every(size.max(1))
    }

    /// Explicit chunk lengths
    pub fn sizes(sizes: impl Into<Vec<usize>>) -> Self {
        Self::Sizes(sizes.into())
    }

    /// Cut positions
    pub fn cuts(cuts: impl Into<Vec<usize>>) -> Self {
        Self::Cuts(cuts.into())
    }

    /// Split `data` according to the plan
    pub fn split<'a>(&self, data: &'a [u8]) -> Vec<&'a [u8]> {
        match self {
            Self::Whole => vec![data],
            Self::Every(size) => data.chunks((*size).max(1)).collect(),
            Self::Sizes(sizes) => {
                let mut chunks = Vec::with_capacity(sizes.len() + 1);
                let mut rest = data;
                for &size in sizes {
                    let (head, tail) = rest.split_at(size.min(rest.len()));
                    chunks.push(head);
                    rest = tail;
                }
                if !rest.is_empty() {
                    chunks.push(rest);
                }
                chunks
            }
            Self::Cuts(cuts) => {
                let mut positions: Vec<usize> =
                    cuts.iter().map(|&cut| cut.min(data.len())).collect();
                positions.sort_unstable();

                let mut chunks = Vec::with_capacity(positions.len() + 1);
                let mut start = 0;
                for position in positions {
                    chunks.push(&data[start..position]);
                    start = position;
                }
                chunks.push(&data[start..]);
                chunks
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_leaves_short_tail() {
        let chunks = ChunkPlan::every(3).split(b"abcdefgh");
        assert_eq!(chunks, vec![&b"abc"[..], &b"def"[..], &b"gh"[..]]);
    }

    #[test]
    fn test_sizes_keep_empty_chunks_and_remainder() {
        let chunks = ChunkPlan::sizes([0, 2, 0]).split(b"abcde");
        assert_eq!(chunks, vec![&b""[..], &b"ab"[..], &b""[..], &b"cde"[..]]);
    }

    #[test]
    fn test_cuts_are_sorted_and_clamped() {
        let chunks = ChunkPlan::cuts([4, 1, 99]).split(b"abcdef");
        assert_eq!(chunks, vec![&b"a"[..], &b"bcd"[..], &b"ef"[..], &b""[..]]);
    }

    #[test]
    fn test_split_concatenates_back() {
        let data: Vec<u8> = (0..=255).collect();
        for plan in [
            ChunkPlan::Whole,
            ChunkPlan::every(63),
            ChunkPlan::sizes([64, 1, 0, 127]),
            ChunkPlan::cuts([200, 10, 64]),
        ] {
            assert_eq!(plan.split(&data).concat(), data);
        }
    }
}
