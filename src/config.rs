// src/config.rs

use serde::{Deserialize, Serialize};
use shakmaty::Role;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::constants::{
    BISHOP_CONTROL_WEIGHT, BISHOP_RESTRICTION_THRESHOLD, KING_CONTROL_WEIGHT,
    KNIGHT_CONTROL_WEIGHT, KNIGHT_RESTRICTION_THRESHOLD, PAWN_CONTROL_WEIGHT,
    QUEEN_CONTROL_WEIGHT, QUEEN_RESTRICTION_THRESHOLD, ROOK_CONTROL_WEIGHT,
    ROOK_RESTRICTION_THRESHOLD,
};

const PROFILES_DIR: &str = "profiles";

/// Tunable weights and thresholds for the analysis overlays. The defaults
/// are the process-wide tables in `constants.rs`; profiles let a user keep
/// variants on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub pawn_control_weight: f32,
    pub knight_control_weight: f32,
    pub bishop_control_weight: f32,
    pub rook_control_weight: f32,
    pub queen_control_weight: f32,
    pub king_control_weight: f32,
    pub queen_restriction_threshold: usize,
    pub rook_restriction_threshold: usize,
    pub bishop_restriction_threshold: usize,
    pub knight_restriction_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pawn_control_weight: PAWN_CONTROL_WEIGHT,
            knight_control_weight: KNIGHT_CONTROL_WEIGHT,
            bishop_control_weight: BISHOP_CONTROL_WEIGHT,
            rook_control_weight: ROOK_CONTROL_WEIGHT,
            queen_control_weight: QUEEN_CONTROL_WEIGHT,
            king_control_weight: KING_CONTROL_WEIGHT,
            queen_restriction_threshold: QUEEN_RESTRICTION_THRESHOLD,
            rook_restriction_threshold: ROOK_RESTRICTION_THRESHOLD,
            bishop_restriction_threshold: BISHOP_RESTRICTION_THRESHOLD,
            knight_restriction_threshold: KNIGHT_RESTRICTION_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    pub fn control_weight(&self, role: Role) -> f32 {
        match role {
            Role::Pawn => self.pawn_control_weight,
            Role::Knight => self.knight_control_weight,
            Role::Bishop => self.bishop_control_weight,
            Role::Rook => self.rook_control_weight,
            Role::Queen => self.queen_control_weight,
            Role::King => self.king_control_weight,
        }
    }

    /// Restriction thresholds exist for the minor and major pieces only;
    /// pawns and kings are never analyzed for restriction.
    pub fn restriction_threshold(&self, role: Role) -> Option<usize> {
        match role {
            Role::Queen => Some(self.queen_restriction_threshold),
            Role::Rook => Some(self.rook_restriction_threshold),
            Role::Bishop => Some(self.bishop_restriction_threshold),
            Role::Knight => Some(self.knight_restriction_threshold),
            Role::Pawn | Role::King => None,
        }
    }
}

pub fn save_profile(name: &str, config: &AnalysisConfig) -> io::Result<()> {
    save_profile_in(Path::new(PROFILES_DIR), name, config)
}

pub fn load_profile(name: &str) -> io::Result<AnalysisConfig> {
    load_profile_in(Path::new(PROFILES_DIR), name)
}

pub fn get_profiles() -> io::Result<Vec<String>> {
    let mut profiles = Vec::new();
    for entry in fs::read_dir(PROFILES_DIR)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            if let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) {
                profiles.push(name.to_string());
            }
        }
    }
    Ok(profiles)
}

fn save_profile_in(dir: &Path, name: &str, config: &AnalysisConfig) -> io::Result<()> {
    let path = dir.join(format!("{name}.json"));
    let json = serde_json::to_string_pretty(config)?;
    fs::File::create(path)?.write_all(json.as_bytes())
}

fn load_profile_in(dir: &Path, name: &str) -> io::Result<AnalysisConfig> {
    let path = dir.join(format!("{name}.json"));
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(io::Error::from)
}
