//! Ground-truth values of the prime-counting function at powers of ten.

/// π(10^k) for k = 0..=29.
///
/// These are the exactly known counts of primes below each power of ten.
/// The table is the ground truth for all error metrics; exponents past its
/// end are undefined and must be rejected, never clamped.
pub const PI_POWERS_OF_TEN: [u128; 30] = [
    0,
    4,
    25,
    168,
    1_229,
    9_592,
    78_498,
    664_579,
    5_761_455,
    50_847_534,
    455_052_511,
    4_118_054_813,
    37_607_912_018,
    346_065_536_839,
    3_204_941_750_802,
    29_844_570_422_669,
    279_238_341_033_925,
    2_623_557_157_654_233,
    24_739_954_287_740_860,
    234_057_667_276_344_607,
    2_220_819_602_560_918_840,
    21_127_269_486_018_731_928,
    201_467_286_689_315_906_290,
    1_925_320_391_606_803_968_923,
    18_435_599_767_349_200_867_866,
    176_846_309_399_143_769_411_680,
    1_699_246_750_872_437_141_327_603,
    16_352_460_426_841_680_446_427_399,
    157_589_269_275_973_410_412_739_598,
    1_520_698_109_714_272_166_094_258_063,
];

/// Largest exponent with a known reference value.
pub const MAX_EXPONENT: u32 = (PI_POWERS_OF_TEN.len() - 1) as u32;

/// Look up π(10^k), or `None` past the end of the table.
pub fn pi_power_of_ten(k: u32) -> Option<u128> {
    PI_POWERS_OF_TEN.get(k as usize).copied()
}
