//! Pin name → functional role inference

use std::fmt;

/// Coarse functional role of a package pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Supply, ground and reference pins (VCCO, GND, VREF, ...)
    Power,
    /// Configuration and JTAG pins (PROGRAM_B, DONE, TCK, ...)
    Config,
    /// User and dedicated I/O
    Io,
    /// Nothing matched
    Unknown,
}

impl Direction {
    /// Column text written in minimal mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Power => "POWER",
            Direction::Config => "CONFIG",
            Direction::Io => "IO",
            Direction::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const POWER_TOKENS: &[&str] = &[
    "VCC", "VCCAUX", "VCCO", "GND", "VREF", "VCCADC", "GNDADC", "VCCBATT",
];

const CONFIG_TOKENS: &[&str] = &[
    "PROGRAM", "DONE", "INIT_B", "TCK", "TMS", "TDI", "TDO", "CCLK", "CFGBVS",
];

const IO_MARKERS: &[&str] = &["IO_", "IO_L", "DXP", "DXN", "VP_", "VN_", "M0_", "M1_", "M2_"];

/// Ordered rules; the first match wins
const RULES: &[(fn(&str) -> bool, Direction)] = &[
    (is_power, Direction::Power),
    (is_config, Direction::Config),
    (has_io_marker, Direction::Io),
    (is_diff_io, Direction::Io),
];

fn is_power(name: &str) -> bool {
    POWER_TOKENS.iter().any(|t| name.contains(t))
}

fn is_config(name: &str) -> bool {
    CONFIG_TOKENS.iter().any(|t| name.contains(t))
}

fn has_io_marker(name: &str) -> bool {
    IO_MARKERS
        .iter()
        .any(|m| name.starts_with(m) || name.contains(m))
}

/// Generic P/N-suffixed pins that are not supplies
fn is_diff_io(name: &str) -> bool {
    (name.contains("P_") || name.contains("N_")) && !name.contains("VCC") && !name.contains("GND")
}

/// Infer the role of a pin from its vendor name (before any `_<PIN>` suffix).
///
/// Examples:
/// - "VCCO_34" → Power
/// - "TCK_0" → Config
/// - "IO_L1P_T0_34" → Io
/// - "MGTREFCLK0P_115" → Io
/// - "RSVDGND" → Power
/// - "NC" → Unknown
pub fn infer_direction(original_name: &str) -> Direction {
    let name = original_name.to_uppercase();

    RULES
        .iter()
        .find(|(matches, _)| matches(&name))
        .map(|&(_, direction)| direction)
        .unwrap_or(Direction::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_pins() {
        assert_eq!(infer_direction("VCCO"), Direction::Power);
        assert_eq!(infer_direction("VCCO_34"), Direction::Power);
        assert_eq!(infer_direction("VCCAUX"), Direction::Power);
        assert_eq!(infer_direction("VCCINT"), Direction::Power);
        assert_eq!(infer_direction("GND"), Direction::Power);
        assert_eq!(infer_direction("GNDADC_0"), Direction::Power);
        assert_eq!(infer_direction("VREFP_0"), Direction::Power);
        assert_eq!(infer_direction("VCCBATT_0"), Direction::Power);
        assert_eq!(infer_direction("MGTAVCC"), Direction::Power);
    }

    #[test]
    fn test_config_pins() {
        assert_eq!(infer_direction("TCK"), Direction::Config);
        assert_eq!(infer_direction("TCK_0"), Direction::Config);
        assert_eq!(infer_direction("TMS_0"), Direction::Config);
        assert_eq!(infer_direction("TDI_0"), Direction::Config);
        assert_eq!(infer_direction("TDO_0"), Direction::Config);
        assert_eq!(infer_direction("PROGRAM_B_0"), Direction::Config);
        assert_eq!(infer_direction("DONE_0"), Direction::Config);
        assert_eq!(infer_direction("INIT_B_0"), Direction::Config);
        assert_eq!(infer_direction("CCLK_0"), Direction::Config);
        assert_eq!(infer_direction("CFGBVS_0"), Direction::Config);
    }

    #[test]
    fn test_io_pins() {
        assert_eq!(infer_direction("IO_L1P_T0"), Direction::Io);
        assert_eq!(infer_direction("IO_L1P_T0_D00_MOSI_14"), Direction::Io);
        assert_eq!(infer_direction("IO_0_13"), Direction::Io);
        assert_eq!(infer_direction("DXP_0"), Direction::Io);
        assert_eq!(infer_direction("DXN_0"), Direction::Io);
        assert_eq!(infer_direction("VP_0"), Direction::Io);
        assert_eq!(infer_direction("VN_0"), Direction::Io);
        assert_eq!(infer_direction("M0_0"), Direction::Io);
        assert_eq!(infer_direction("M2_0"), Direction::Io);
    }

    #[test]
    fn test_generic_pn_fallback() {
        assert_eq!(infer_direction("MGTREFCLK0P_115"), Direction::Io);
        assert_eq!(infer_direction("MGTREFCLK0N_115"), Direction::Io);
    }

    #[test]
    fn test_power_wins_over_io() {
        // Supply tokens are checked before any I/O marker
        assert_eq!(infer_direction("IO_VREF_34"), Direction::Power);
        assert_eq!(infer_direction("MGTAVCC_G"), Direction::Power);
    }

    #[test]
    fn test_config_wins_over_io() {
        assert_eq!(infer_direction("IO_L6P_T0_FCS_B_DONE_14"), Direction::Config);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_direction("vcco_34"), Direction::Power);
        assert_eq!(infer_direction("tck"), Direction::Config);
        assert_eq!(infer_direction("io_l1p_t0"), Direction::Io);
    }

    #[test]
    fn test_unknown_pins() {
        assert_eq!(infer_direction("RESERVED"), Direction::Unknown);
        assert_eq!(infer_direction("NC"), Direction::Unknown);
        assert_eq!(infer_direction("RSVD"), Direction::Unknown);
        assert_eq!(infer_direction(""), Direction::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Power.to_string(), "POWER");
        assert_eq!(Direction::Config.to_string(), "CONFIG");
        assert_eq!(Direction::Io.to_string(), "IO");
        assert_eq!(Direction::Unknown.to_string(), "UNKNOWN");
    }
}
