#![allow(dead_code)]
use zutil_dns_codec::hex;

/// Standard query for www.google.com A/IN, id 0x241a, RD set.
pub const GOOGLE_QUERY: &str = "241a 0100 0001 0000 0000 0000 \
    03777777 06676f6f676c65 03636f6d 00 0001 0001";

/// Recursive answer to [`GOOGLE_QUERY`]: one CNAME to www.l.google.com
/// and two A records whose owner name points into the CNAME RDATA.
pub const GOOGLE_MULTI_ANSWER: &str = "241a 8180 0001 0003 0000 0000 \
    03777777 06676f6f676c65 03636f6d 00 0001 0001 \
    c00c 0005 0001 00052839 0012 03777777 016c 06676f6f676c65 03636f6d00 \
    c02c 0001 0001 000000e3 0004 42f95963 \
    c02c 0001 0001 000000e3 0004 42f95968";

/// mDNS response for appletv.local: one A answer, an AAAA and an NSEC
/// additional record with the cache-flush bit set.
pub const APPLETV_RESPONSE: &str = "0000 8400 0000 0001 0000 0002 \
    07617070 6c657476 056c6f63 616c 00 0001 0001 00007800 0004 996d075a \
    c00c 001c 8001 00007800 0010 fe800000000000000223 32fffeb12152 \
    c00c 002f 8001 00007800 0008 c00c000440000008";

/// mDNS query from an iPhone: six questions sharing suffixes through
/// chained pointers, plus an OPT additional record.
pub const IPHONE_QUERY: &str = "0000 0000 0006 0000 0000 0001 \
    0f5f636f6d70616e696f6e2d6c696e6b 045f746370 056c6f63616c 00 000c 0001 \
    085f686f6d656b6974 c01c 000c 0001 \
    0368616c c021 0041 0001 \
    c03b 001c 0001 \
    c03b 0001 0001 \
    0c5f736c6565702d70726f7879 045f756470 c021 000c 0001 \
    00 0029 05a0 00001194 0012 0004000e00657ae6ba293400d6073af22ee7";

/// Query for appletv.local A/IN with an all-zero header.
pub const APPLETV_QUERY: &str = "0000 0000 0001 0000 0000 0000 \
    07 6170706c657476 05 6c6f63616c 00 0001 0001";

pub fn bytes(fixture: &str) -> Vec<u8> {
    hex::decode(fixture).expect("fixture is valid hex")
}
