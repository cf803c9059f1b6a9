//! Static wiring catalog
//!
//! Every rotor and reflector the emulated machine family shipped, keyed by
//! closed enums. Unknown names can only fail at parse time; nothing
//! unresolved ever enters the cipher path.
//!
//! Wiring and notch data per variant:
//! - Wehrmacht/Kriegsmarine rotors I-VIII (VI-VIII carry two notches)
//! - Greek rotors Beta/Gamma (no notch, never step)
//! - Norenigma N-I..N-V, Swiss K K-I..K-III, Railway R-I..R-III
//! - Reflectors A, B, C, the M4 thin pair, and the N/K/R rewires

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One rotor's fixed wiring and turnover notch set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorDef {
    pub name: &'static str,
    /// Forward permutation: `wiring[i]` is the exit letter for entry contact i
    pub wiring: &'static str,
    /// Window letters at which this rotor trips its neighbour (0, 1 or 2)
    pub notches: &'static str,
}

/// One reflector's fixed involutive wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorDef {
    pub name: &'static str,
    pub wiring: &'static str,
}

/// Every rotor in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorId {
    // Wehrmacht / Kriegsmarine
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    // Greek (auxiliary) rotors for the M4 fourth slot
    Beta,
    Gamma,
    // Norenigma
    #[serde(rename = "N-I", alias = "N_I")]
    NI,
    #[serde(rename = "N-II", alias = "N_II")]
    NII,
    #[serde(rename = "N-III", alias = "N_III")]
    NIII,
    #[serde(rename = "N-IV", alias = "N_IV")]
    NIV,
    #[serde(rename = "N-V", alias = "N_V")]
    NV,
    // Swiss K
    #[serde(rename = "K-I", alias = "K_I")]
    KI,
    #[serde(rename = "K-II", alias = "K_II")]
    KII,
    #[serde(rename = "K-III", alias = "K_III")]
    KIII,
    // Railway
    #[serde(rename = "R-I", alias = "R_I")]
    RI,
    #[serde(rename = "R-II", alias = "R_II")]
    RII,
    #[serde(rename = "R-III", alias = "R_III")]
    RIII,
}

impl RotorId {
    /// Wiring and notch set for this rotor
    pub const fn def(self) -> RotorDef {
        match self {
            RotorId::I => RotorDef {
                name: "I",
                wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
                notches: "Q",
            },
            RotorId::II => RotorDef {
                name: "II",
                wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
                notches: "E",
            },
            RotorId::III => RotorDef {
                name: "III",
                wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
                notches: "V",
            },
            RotorId::IV => RotorDef {
                name: "IV",
                wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
                notches: "J",
            },
            RotorId::V => RotorDef {
                name: "V",
                wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
                notches: "Z",
            },
            RotorId::VI => RotorDef {
                name: "VI",
                wiring: "JPGVOUMFYQBENHZRDKASXLICTW",
                notches: "ZM",
            },
            RotorId::VII => RotorDef {
                name: "VII",
                wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT",
                notches: "ZM",
            },
            RotorId::VIII => RotorDef {
                name: "VIII",
                wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV",
                notches: "ZM",
            },
            RotorId::Beta => RotorDef {
                name: "Beta",
                wiring: "LEYJVCNIXWPBQMDRTAKZGFUHOS",
                notches: "",
            },
            RotorId::Gamma => RotorDef {
                name: "Gamma",
                wiring: "FSOKANUERHMBTIYCWLQPZXVGJD",
                notches: "",
            },
            RotorId::NI => RotorDef {
                name: "N-I",
                wiring: "WTOKASUYVRBXJHQCPZEFMDINLG",
                notches: "Q",
            },
            RotorId::NII => RotorDef {
                name: "N-II",
                wiring: "GJLPUBSWEMCTQVHXAFZDRONYKI",
                notches: "E",
            },
            RotorId::NIII => RotorDef {
                name: "N-III",
                wiring: "JWFMCPNOHRYIDXBVGQLTAEZKSU",
                notches: "V",
            },
            RotorId::NIV => RotorDef {
                name: "N-IV",
                wiring: "FGZJMVXEPBWSHQCTOIARYKNDLU",
                notches: "J",
            },
            RotorId::NV => RotorDef {
                name: "N-V",
                wiring: "HEJXQOTZBVFDASCILWPGYNMURK",
                notches: "Z",
            },
            RotorId::KI => RotorDef {
                name: "K-I",
                wiring: "PEZUOHXSCVFMTBGLRINQJWAYDK",
                notches: "Q",
            },
            RotorId::KII => RotorDef {
                name: "K-II",
                wiring: "ZOUESYDKFWPCIQXHMVBLGNJRAT",
                notches: "E",
            },
            RotorId::KIII => RotorDef {
                name: "K-III",
                wiring: "EHRVXGAOBQUSIMZFLYNWKTPDJC",
                notches: "V",
            },
            RotorId::RI => RotorDef {
                name: "R-I",
                wiring: "JGDQOXUSCAMIFRVTPNEWKBLZYH",
                notches: "Q",
            },
            RotorId::RII => RotorDef {
                name: "R-II",
                wiring: "NTZPSFBOKMWRCJDIVLAEYUXHGQ",
                notches: "E",
            },
            RotorId::RIII => RotorDef {
                name: "R-III",
                wiring: "JVIUBHTCDYAKEQZPOSGXNRMWFL",
                notches: "V",
            },
        }
    }

    /// All rotors, for catalog-wide checks
    pub const ALL: [RotorId; 21] = [
        RotorId::I,
        RotorId::II,
        RotorId::III,
        RotorId::IV,
        RotorId::V,
        RotorId::VI,
        RotorId::VII,
        RotorId::VIII,
        RotorId::Beta,
        RotorId::Gamma,
        RotorId::NI,
        RotorId::NII,
        RotorId::NIII,
        RotorId::NIV,
        RotorId::NV,
        RotorId::KI,
        RotorId::KII,
        RotorId::KIII,
        RotorId::RI,
        RotorId::RII,
        RotorId::RIII,
    ];

    pub const fn as_str(self) -> &'static str {
        self.def().name
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotorId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorId::ALL
            .iter()
            .copied()
            .find(|id| {
                let name = id.as_str();
                s == name || s.replace('_', "-") == name
            })
            .ok_or_else(|| ConfigError::UnknownRotor(s.to_string()))
    }
}

/// Every reflector in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectorId {
    A,
    B,
    C,
    #[serde(rename = "B-thin", alias = "B_Thin")]
    BThin,
    #[serde(rename = "C-thin", alias = "C_Thin")]
    CThin,
    N,
    K,
    R,
}

impl ReflectorId {
    pub const fn def(self) -> ReflectorDef {
        match self {
            ReflectorId::A => ReflectorDef {
                name: "A",
                wiring: "EJMZALYXVBWFCRQUONTSPIKHGD",
            },
            ReflectorId::B => ReflectorDef {
                name: "B",
                wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            },
            ReflectorId::C => ReflectorDef {
                name: "C",
                wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
            },
            ReflectorId::BThin => ReflectorDef {
                name: "B-thin",
                wiring: "ENKQAUYWJICOPBLMDXZVFTHRGS",
            },
            ReflectorId::CThin => ReflectorDef {
                name: "C-thin",
                wiring: "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
            },
            ReflectorId::N => ReflectorDef {
                name: "N",
                wiring: "MOWJYPUXNDSRAIBFVLKZGQCHET",
            },
            ReflectorId::K => ReflectorDef {
                name: "K",
                wiring: "IMETCGFRAYSQBZXWLHKDVUPOJN",
            },
            ReflectorId::R => ReflectorDef {
                name: "R",
                wiring: "QYHOGNECVPUZTFDJAXWMKISRBL",
            },
        }
    }

    pub const ALL: [ReflectorId; 8] = [
        ReflectorId::A,
        ReflectorId::B,
        ReflectorId::C,
        ReflectorId::BThin,
        ReflectorId::CThin,
        ReflectorId::N,
        ReflectorId::K,
        ReflectorId::R,
    ];

    pub const fn as_str(self) -> &'static str {
        self.def().name
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReflectorId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReflectorId::ALL
            .iter()
            .copied()
            .find(|id| {
                let name = id.as_str();
                s == name || s.replace('_', "-").eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ConfigError::UnknownReflector(s.to_string()))
    }
}

/// The machine variants this catalog covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineModel {
    /// Wehrmacht Enigma I (Heer/Luftwaffe)
    #[serde(rename = "I")]
    EnigmaI,
    /// Kriegsmarine M3
    M3,
    /// Kriegsmarine M4 (U-boat, 4-rotor)
    M4,
    /// Norenigma (post-war Norwegian Police)
    Norway,
    /// Commercial Swiss K
    SwissK,
    /// Reichsbahn (Railway)
    Railway,
}

impl MachineModel {
    pub const ALL: [MachineModel; 6] = [
        MachineModel::EnigmaI,
        MachineModel::M3,
        MachineModel::M4,
        MachineModel::Norway,
        MachineModel::SwissK,
        MachineModel::Railway,
    ];

    /// Number of rotor slots, left to right
    pub const fn slots(self) -> usize {
        match self {
            MachineModel::M4 => 4,
            _ => 3,
        }
    }

    /// Whether this variant carries a plugboard
    pub const fn has_plugboard(self) -> bool {
        !matches!(self, MachineModel::SwissK | MachineModel::Railway)
    }

    /// Rotors that may be fitted on this variant (any slot for 3-rotor
    /// machines; slot restrictions for the M4 are enforced at construction)
    pub const fn allowed_rotors(self) -> &'static [RotorId] {
        match self {
            MachineModel::EnigmaI => &[RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V],
            MachineModel::M3 => &[
                RotorId::I,
                RotorId::II,
                RotorId::III,
                RotorId::IV,
                RotorId::V,
                RotorId::VI,
                RotorId::VII,
                RotorId::VIII,
            ],
            MachineModel::M4 => &[
                RotorId::Beta,
                RotorId::Gamma,
                RotorId::I,
                RotorId::II,
                RotorId::III,
                RotorId::IV,
                RotorId::V,
                RotorId::VI,
                RotorId::VII,
                RotorId::VIII,
            ],
            MachineModel::Norway => &[RotorId::NI, RotorId::NII, RotorId::NIII, RotorId::NIV, RotorId::NV],
            MachineModel::SwissK => &[RotorId::KI, RotorId::KII, RotorId::KIII],
            MachineModel::Railway => &[RotorId::RI, RotorId::RII, RotorId::RIII],
        }
    }

    /// Auxiliary (Greek) rotors: legal only in slot 0 of a 4-rotor stack,
    /// never stepping
    pub const fn greek_rotors(self) -> &'static [RotorId] {
        match self {
            MachineModel::M4 => &[RotorId::Beta, RotorId::Gamma],
            _ => &[],
        }
    }

    pub const fn allowed_reflectors(self) -> &'static [ReflectorId] {
        match self {
            MachineModel::EnigmaI => &[ReflectorId::A, ReflectorId::B, ReflectorId::C],
            MachineModel::M3 => &[ReflectorId::B, ReflectorId::C],
            MachineModel::M4 => &[ReflectorId::BThin, ReflectorId::CThin],
            MachineModel::Norway => &[ReflectorId::N],
            MachineModel::SwissK => &[ReflectorId::K],
            MachineModel::Railway => &[ReflectorId::R],
        }
    }

    /// Short identifier, matches the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            MachineModel::EnigmaI => "I",
            MachineModel::M3 => "M3",
            MachineModel::M4 => "M4",
            MachineModel::Norway => "Norway",
            MachineModel::SwissK => "SwissK",
            MachineModel::Railway => "Railway",
        }
    }

    /// Human-readable name for logs and UIs
    pub const fn display_name(self) -> &'static str {
        match self {
            MachineModel::EnigmaI => "Enigma I (Heer/Luftwaffe)",
            MachineModel::M3 => "Enigma M3 (Kriegsmarine)",
            MachineModel::M4 => "Enigma M4 (U-Boat)",
            MachineModel::Norway => "Norenigma (Police)",
            MachineModel::SwissK => "Enigma K (Swiss)",
            MachineModel::Railway => "Enigma R (Railway)",
        }
    }
}

impl fmt::Display for MachineModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MachineModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MachineModel::ALL
            .iter()
            .copied()
            .find(|m| s.eq_ignore_ascii_case(m.as_str()))
            .ok_or_else(|| ConfigError::UnknownModel(s.to_string()))
    }
}
