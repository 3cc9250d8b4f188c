const MAGNITUDES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

#[derive(Default)]
pub struct ArithmeticRenderer;

impl ArithmeticRenderer {
    pub fn render_fixed(&self, value: f64, decimals: usize) -> String {
        format!("{:.*}", decimals, value)
    }

    /// Shortens a large quantity with a K/M/B/T suffix, e.g. `2500000` to `2.5M`.
    pub fn render_abbreviated(&self, value: f64) -> String {
        MAGNITUDES
            .iter()
            .find(|(magnitude, _)| value >= *magnitude)
            .map_or_else(
                || value.to_string(),
                |(magnitude, suffix)| format!("{}{}", round_to_tenth(value / magnitude), suffix),
            )
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::case;

    #[case(0.0 => "0"                          ; "zero")]
    #[case(500.0 => "500"                      ; "small integer unchanged")]
    #[case(999.5 => "999.5"                    ; "small fraction unchanged")]
    #[case(1_000.0 => "1K"                     ; "thousand")]
    #[case(1_500.0 => "1.5K"                   ; "thousands")]
    #[case(1_250.0 => "1.3K"                   ; "half rounds away from zero")]
    #[case(2_500_000.0 => "2.5M"               ; "millions")]
    #[case(3_400_000_000.0 => "3.4B"           ; "billions")]
    #[case(5_000_000_000_000.0 => "5T"         ; "trillions drop trailing zero")]
    #[case(1_234_567_000_000_000.0 => "1234.6T"; "beyond trillions")]
    #[case(19_700_000.0 => "19.7M"             ; "supply")]
    fn render_abbreviated(value: f64) -> String {
        ArithmeticRenderer.render_abbreviated(value)
    }

    #[case(62666.0134, 4 => "62666.0134" ; "price")]
    #[case(0.5, 4 => "0.5000"            ; "padded")]
    #[case(5.1234, 2 => "5.12"           ; "truncated")]
    #[case(-3.0, 2 => "-3.00"            ; "negative")]
    fn render_fixed(value: f64, decimals: usize) -> String {
        ArithmeticRenderer.render_fixed(value, decimals)
    }
}
