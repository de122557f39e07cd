/// Mean absolute deviation of `samples` around their own DC offset.
///
/// Both the offset and the final mean use truncating integer division, which is
/// the unit every threshold multiplier is tuned against. An empty buffer has a
/// magnitude of 0.
pub fn rectified_magnitude(samples: &[i16]) -> u32 {
    if samples.is_empty() {
        return 0;
    }

    let count = samples.len() as i64;
    let total_raw: i64 = samples.iter().map(|&s| i64::from(s)).sum();
    let dc_offset = total_raw / count;

    let total_magnitude: i64 = samples
        .iter()
        .map(|&s| (i64::from(s) - dc_offset).abs())
        .sum();

    (total_magnitude / count).min(u32::MAX as i64) as u32
}

/// Converts an unsigned ADC conversion into the signed sample domain.
pub fn adc_code_to_sample(code: u16) -> i16 {
    code.min(i16::MAX as u16) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_has_zero_magnitude() {
        assert_eq!(rectified_magnitude(&[]), 0);
    }

    #[test]
    fn constant_buffer_has_zero_magnitude() {
        assert_eq!(rectified_magnitude(&[1_850; 64]), 0);
    }

    #[test]
    fn square_wave_reports_half_peak_to_peak() {
        let samples = [0, 10, 0, 10, 0, 10, 0, 10];
        assert_eq!(rectified_magnitude(&samples), 5);
    }

    #[test]
    fn dc_offset_is_removed_before_rectifying() {
        let around_zero = [-40, 40, -40, 40];
        let around_bias = [1_960, 2_040, 1_960, 2_040];
        assert_eq!(rectified_magnitude(&around_zero), 40);
        assert_eq!(rectified_magnitude(&around_bias), 40);
    }

    #[test]
    fn offset_and_mean_truncate() {
        // offset = 3 / 2 = 1, deviations 0 + 1, mean = 1 / 2 = 0
        assert_eq!(rectified_magnitude(&[1, 2]), 0);
        // offset = -3 / 3 = -1, deviations 1 + 0 + 1, mean = 2 / 3 = 0
        assert_eq!(rectified_magnitude(&[-2, -1, 0]), 0);
        // offset = 30 / 4 = 7, deviations 7 + 7 + 7 + 9, mean = 30 / 4 = 7
        assert_eq!(rectified_magnitude(&[0, 0, 14, 16]), 7);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let samples = [i16::MIN, i16::MAX, i16::MIN, i16::MAX];
        assert_eq!(rectified_magnitude(&samples), 32_767);
    }

    #[test]
    fn adc_codes_above_signed_range_saturate() {
        assert_eq!(adc_code_to_sample(4_095), 4_095);
        assert_eq!(adc_code_to_sample(u16::MAX), i16::MAX);
    }
}
