#![no_std]

pub static ERROR_READER_PAIR_MISMATCH: &[u8] =
    b"Reader asset and reader oracle must both be set or both be empty.";

pub static ERROR_INVALID_POSTER: &[u8] = b"Poster address can not be zero.";

pub static ERROR_INVALID_READER_SLOT: &[u8] = b"Invalid reader slot.";
