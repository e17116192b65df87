//! Group parameters from [RFC 5114](https://tools.ietf.org/html/rfc5114).
//!
//! Only the 2048-bit MODP group with a 256-bit prime order subgroup
//! (section 2.3) is provided. The decimal literals are parsed once, on first
//! use, and shared for the rest of the process.

use lazy_static::lazy_static;

use crate::Int;

/// Integer wide enough for the modulus and the product of two residues.
pub type Wide = Int<128>;

/// Two-limb integer holding a 64-bit private exponent.
pub type Narrow = Int<2>;

/// Number of random bytes drawn for a private exponent.
pub const PRIVATE_KEY_BYTES: usize = 8;

const RFC5114_2048_256_P: &str = concat!(
    "171254583176141379301960419792575778264088323240375085733932929816426671",
    "397476217788024387752387285929683446135893799323484756135034769321631669",
    "738132186983438164632891441853629126025225404949830905314972329658295365",
    "245072698488256583114202993359222957097432675083225259667739503949192575",
    "768420387716327420441424710535098501236058838158571626669177751934961573",
    "726561955583057270098912760065140004093658772181713883199238963093777917",
    "625906143118496429613802248519404604217104493689272529748703958739363879",
    "096722748832953774810081504758785902705917983505634881680809238046118223",
    "87520198054002990623911454389104774092183",
);

const RFC5114_2048_256_G: &str = concat!(
    "804136732704618930269398466502670637484460828987437442572879766950943588",
    "145914066265021583283347132847033406462850869223199940184033204619256928",
    "735199168996327965689256248477327858420804098763156962852046406953236127",
    "404737444434499665183297937831884994374166211039599577842927081922243161",
    "092735600591383693246209977007623955404285528713802680696047027732622948",
    "281800396200445376440099579097404266367569212075872614586906123644389350",
    "913614794241444555184816239146854144435570778569782574185684916123388730",
    "701742837182360812569989290496084122159334449908899602188397218524185477",
    "7608212592397013510086894908468466292313",
);

/// A prime modulus `p` and generator `g` agreed on by both parties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub p: Wide,
    pub g: Wide,
}

lazy_static! {
    /// RFC 5114 section 2.3: 2048-bit MODP group with 256-bit prime order
    /// subgroup.
    pub static ref RFC5114_2048_256: Parameters = Parameters {
        p: RFC5114_2048_256_P.parse().expect("RFC 5114 modulus is a valid literal"),
        g: RFC5114_2048_256_G.parse().expect("RFC 5114 generator is a valid literal"),
    };
}
