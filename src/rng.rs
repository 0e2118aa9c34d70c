use rand::RngCore;

/// Return an integer drawn uniformly from `lower..=upper`.
///
/// Raw 32-bit outputs of `rng` that fall in the incomplete final "bucket" of
/// the generator's range are rejected and redrawn, so every value in the
/// range is equally likely no matter how the range's width divides `2^32`.
///
/// If `lower >= upper`, `lower` is returned without consuming any randomness.
pub(crate) fn uniform_random<R: RngCore + ?Sized>(rng: &mut R, lower: i32, upper: i32) -> i32 {
    if lower >= upper {
        return lower;
    }
    let Some(range) = upper.abs_diff(lower).checked_add(1) else {
        // The range covers every i32, so every raw output maps to one value.
        return lower.wrapping_add_unsigned(rng.next_u32());
    };
    // 2^32 mod range: the number of raw values that would bias the result
    let rejected = (u32::MAX % range + 1) % range;
    loop {
        let r = rng.next_u32();
        if r <= u32::MAX - rejected {
            return lower.wrapping_add_unsigned(r % range);
        }
    }
}
