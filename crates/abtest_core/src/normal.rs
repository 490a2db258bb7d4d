//! Standard normal distribution functions.
//!
//! The quantile uses Wichura's AS 241 (PPND16) rational approximations, which
//! are accurate to about 1e-16 relative. The CDF uses Hart's double precision
//! algorithm as arranged by West (2005).

/// Cumulative distribution function of the standard normal distribution.
pub fn cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let xabs = x.abs();

    let tail = if xabs > 37.0 {
        0.0
    } else {
        let exponential = (-xabs * xabs / 2.0).exp();
        if xabs < 7.071_067_811_865_47 {
            let mut num = 3.526_249_659_989_11e-2 * xabs + 0.700_383_064_443_688;
            num = num * xabs + 6.373_962_203_531_65;
            num = num * xabs + 33.912_866_078_383;
            num = num * xabs + 112.079_291_497_871;
            num = num * xabs + 221.213_596_169_931;
            num = num * xabs + 220.206_867_912_376;

            let mut den = 8.838_834_764_831_84e-2 * xabs + 1.755_667_163_182_64;
            den = den * xabs + 16.064_177_579_207;
            den = den * xabs + 86.780_732_202_946_1;
            den = den * xabs + 296.564_248_779_674;
            den = den * xabs + 637.333_633_378_831;
            den = den * xabs + 793.826_512_519_948;
            den = den * xabs + 440.413_735_824_752;

            exponential * num / den
        } else {
            let mut build = xabs + 0.65;
            build = xabs + 4.0 / build;
            build = xabs + 3.0 / build;
            build = xabs + 2.0 / build;
            build = xabs + 1.0 / build;
            exponential / build / 2.506_628_274_631
        }
    };

    if x > 0.0 { 1.0 - tail } else { tail }
}

/// Quantile function (inverse CDF) of the standard normal distribution.
///
/// Returns `-inf`/`+inf` at 0 and 1 and NaN outside `[0, 1]`.
pub fn quantile(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let q = p - 0.5;
    if q.abs() <= 0.425 {
        let r = 0.180_625 - q * q;
        let num = ((((((2_509.080_928_730_122_7 * r + 33_430.575_583_588_128) * r
            + 67_265.770_927_008_7)
            * r
            + 45_921.953_931_549_87)
            * r
            + 13_731.693_765_509_461)
            * r
            + 1_971.590_950_306_551_3)
            * r
            + 133.141_667_891_784_38)
            * r
            + 3.387_132_872_796_366_5;
        let den = ((((((5_226.495_278_852_546 * r + 28_729.085_735_721_943) * r
            + 39_307.895_800_092_71)
            * r
            + 21_213.794_301_586_597)
            * r
            + 5_394.196_021_424_751)
            * r
            + 687.187_007_492_057_9)
            * r
            + 42.313_330_701_600_91)
            * r
            + 1.0;
        return q * num / den;
    }

    let tail = if q < 0.0 { p } else { 1.0 - p };
    let mut r = (-tail.ln()).sqrt();

    let value = if r <= 5.0 {
        r -= 1.6;
        let num = ((((((7.745_450_142_783_414e-4 * r + 0.022_723_844_989_269_184) * r
            + 0.241_780_725_177_450_6)
            * r
            + 1.270_458_252_452_368_4)
            * r
            + 3.647_848_324_763_204_5)
            * r
            + 5.769_497_221_460_691)
            * r
            + 4.630_337_846_156_545)
            * r
            + 1.423_437_110_749_683_5;
        let den = ((((((1.050_750_071_644_416_8e-9 * r + 5.475_938_084_995_345e-4) * r
            + 0.015_198_666_563_616_457)
            * r
            + 0.148_103_976_427_480_08)
            * r
            + 0.689_767_334_985_1)
            * r
            + 1.676_384_830_183_803_8)
            * r
            + 2.053_191_626_637_759)
            * r
            + 1.0;
        num / den
    } else {
        r -= 5.0;
        let num = ((((((2.010_334_399_292_288_1e-7 * r + 2.711_555_568_743_487_6e-5) * r
            + 0.001_242_660_947_388_078_4)
            * r
            + 0.026_532_189_526_576_124)
            * r
            + 0.296_560_571_828_504_9)
            * r
            + 1.784_826_539_917_291_3)
            * r
            + 5.463_784_911_164_114)
            * r
            + 6.657_904_643_501_103;
        let den = ((((((2.044_263_103_389_939_7e-15 * r + 1.421_511_758_316_446e-7) * r
            + 1.846_318_317_510_054_8e-5)
            * r
            + 7.868_691_311_456_133e-4)
            * r
            + 0.014_875_361_290_850_615)
            * r
            + 0.136_929_880_922_735_8)
            * r
            + 0.599_832_206_555_887_9)
            * r
            + 1.0;
        num / den
    };

    if q < 0.0 { -value } else { value }
}
