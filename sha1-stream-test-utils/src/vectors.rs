//! Published SHA-1 test vectors (FIPS 180-4 examples and common references)

/// An input and its expected SHA-1 digest in lowercase hex
#[derive(Debug, Clone, Copy)]
pub struct KnownVector {
    pub input: &'static [u8],
    pub digest: &'static str,
}

pub const EMPTY_DIGEST: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
pub const ABC_DIGEST: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

/// SHA-1 of one million repetitions of `a`
pub const MILLION_A_DIGEST: &str = "34aa973cd4c4daa4f61eeb2bdbad27316534016f";

pub const KNOWN_VECTORS: &[KnownVector] = &[
    KnownVector {
        input: b"",
        digest: EMPTY_DIGEST,
    },
    KnownVector {
        input: b"abc",
        digest: ABC_DIGEST,
    },
    KnownVector {
        input: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        digest: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    KnownVector {
        input: b"message digest",
        digest: "c12252ceda8be8994d5fa0290a47231c1d16aae3",
    },
    KnownVector {
        input: b"The quick brown fox jumps over the lazy dog",
        digest: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    },
];
