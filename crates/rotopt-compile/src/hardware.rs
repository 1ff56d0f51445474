//! Hardware profiles: native basis, gate durations and register width.
//!
//! A [`HardwareProfile`] is built once, validated at construction and then
//! only read. Profiles can be built in code or decoded from JSON:
//!
//! ```
//! use rotopt_compile::{HardwareProfile, NativeBasis};
//!
//! let profile = HardwareProfile::from_json(
//!     r#"{"num_qubits": 1, "basis_gates": ["X", "Z", "CX"], "durations": {"x": 20}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(profile.basis(), NativeBasis::Xz);
//! assert_eq!(profile.durations().x, 20);
//! assert_eq!(profile.durations().z, 10);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use rotopt_ir::{Axis, Gate, IrError, QubitId};

use crate::error::{CompileError, CompileResult};

/// Widest register a profile may describe.
pub const MAX_QUBITS: u32 = 2;

/// Native rotation axes of a target. CX is native on every basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NativeBasis {
    /// X, Y and Z rotations.
    #[default]
    Xyz,
    /// X and Z rotations.
    Xz,
    /// Y and Z rotations.
    Yz,
}

impl NativeBasis {
    /// Check if rotations around `axis` are native.
    #[inline]
    pub fn contains(self, axis: Axis) -> bool {
        match self {
            NativeBasis::Xyz => true,
            NativeBasis::Xz => axis != Axis::Y,
            NativeBasis::Yz => axis != Axis::X,
        }
    }

    /// Gate names of this basis, in notation spelling.
    pub fn gate_names(self) -> &'static [&'static str] {
        match self {
            NativeBasis::Xyz => &["X", "Y", "Z", "CX"],
            NativeBasis::Xz => &["X", "Z", "CX"],
            NativeBasis::Yz => &["Y", "Z", "CX"],
        }
    }

    /// Resolve a set of gate names such as `["X", "Z", "CX"]`.
    ///
    /// Order and duplicates are ignored. Only the three accepted sets resolve;
    /// `{X, Y, CX}` is rejected because every decomposition emitted here
    /// needs Z rotations.
    pub fn from_gate_names<S: AsRef<str>>(names: &[S]) -> CompileResult<Self> {
        let (mut x, mut y, mut z, mut cx) = (false, false, false, false);
        for name in names {
            match name.as_ref() {
                "X" => x = true,
                "Y" => y = true,
                "Z" => z = true,
                "CX" => cx = true,
                other => {
                    return Err(CompileError::InvalidHardwareProfile(format!(
                        "unknown basis gate '{other}'"
                    )));
                }
            }
        }
        match (x, y, z, cx) {
            (true, true, true, true) => Ok(NativeBasis::Xyz),
            (true, false, true, true) => Ok(NativeBasis::Xz),
            (false, true, true, true) => Ok(NativeBasis::Yz),
            _ => Err(CompileError::InvalidHardwareProfile(format!(
                "basis {{{}}} is not one of {{X, Y, Z, CX}}, {{X, Z, CX}}, {{Y, Z, CX}}",
                names
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl fmt::Display for NativeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.gate_names().join(", "))
    }
}

/// Duration of each gate kind, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateDurations {
    /// X rotation.
    pub x: u64,
    /// Y rotation.
    pub y: u64,
    /// Z rotation.
    pub z: u64,
    /// CX interaction.
    pub cx: u64,
}

impl GateDurations {
    /// Check that every duration is positive.
    pub fn validate(&self) -> CompileResult<()> {
        for (name, value) in [("x", self.x), ("y", self.y), ("z", self.z), ("cx", self.cx)] {
            if value == 0 {
                return Err(CompileError::InvalidHardwareProfile(format!(
                    "duration of '{name}' must be positive"
                )));
            }
        }
        Ok(())
    }
}

impl Default for GateDurations {
    fn default() -> Self {
        Self {
            x: 10,
            y: 10,
            z: 10,
            cx: 100,
        }
    }
}

/// Serialized form of a hardware profile.
///
/// `basis_gates` defaults to `["X", "Y", "Z", "CX"]`; each missing duration
/// takes its [`GateDurations::default`] value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardwareConfig {
    /// Register width (1 or 2).
    pub num_qubits: u32,
    /// Native gate names.
    #[serde(default = "default_basis_gates")]
    pub basis_gates: Vec<String>,
    /// Per-gate durations.
    #[serde(default)]
    pub durations: DurationsConfig,
}

/// Partially specified durations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DurationsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cx: Option<u64>,
}

fn default_basis_gates() -> Vec<String> {
    NativeBasis::Xyz
        .gate_names()
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl DurationsConfig {
    fn resolve(self) -> GateDurations {
        let defaults = GateDurations::default();
        GateDurations {
            x: self.x.unwrap_or(defaults.x),
            y: self.y.unwrap_or(defaults.y),
            z: self.z.unwrap_or(defaults.z),
            cx: self.cx.unwrap_or(defaults.cx),
        }
    }
}

/// An immutable description of the target device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HardwareConfig", into = "HardwareConfig")]
pub struct HardwareProfile {
    num_qubits: u32,
    basis: NativeBasis,
    durations: GateDurations,
}

impl HardwareProfile {
    /// Create a profile with default durations.
    pub fn new(num_qubits: u32, basis: NativeBasis) -> CompileResult<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(CompileError::InvalidHardwareProfile(format!(
                "number of qubits must be 1 or 2, got {num_qubits}"
            )));
        }
        Ok(Self {
            num_qubits,
            basis,
            durations: GateDurations::default(),
        })
    }

    /// Replace the gate durations.
    pub fn with_durations(mut self, durations: GateDurations) -> CompileResult<Self> {
        durations.validate()?;
        self.durations = durations;
        Ok(self)
    }

    /// Build a profile from its serialized form.
    pub fn from_config(config: HardwareConfig) -> CompileResult<Self> {
        let basis = NativeBasis::from_gate_names(&config.basis_gates)?;
        Self::new(config.num_qubits, basis)?.with_durations(config.durations.resolve())
    }

    /// Decode a profile from JSON.
    pub fn from_json(json: &str) -> CompileResult<Self> {
        let config: HardwareConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Encode the profile as JSON.
    pub fn to_json(&self) -> CompileResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Register width.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Native rotation axes.
    pub fn basis(&self) -> NativeBasis {
        self.basis
    }

    /// Gate durations.
    pub fn durations(&self) -> &GateDurations {
        &self.durations
    }

    /// Check if `gate` can run on this target as is.
    pub fn supports(&self, gate: &Gate) -> bool {
        match gate {
            Gate::Rx(..) | Gate::Ry(..) | Gate::Rz(..) => {
                gate.axis().is_some_and(|axis| self.basis.contains(axis))
            }
            Gate::Cx(..) => self.num_qubits == 2 && gate.validate().is_ok(),
            Gate::U { .. } => false,
        }
    }

    /// Check if every gate of `gates` is native.
    pub fn supports_all(&self, gates: &[Gate]) -> bool {
        gates.iter().all(|g| self.supports(g))
    }

    /// Duration of a single gate.
    ///
    /// `U` has no hardware duration; it must be decomposed first.
    pub fn duration_of(&self, gate: &Gate) -> CompileResult<u64> {
        match gate {
            Gate::Rx(..) => Ok(self.durations.x),
            Gate::Ry(..) => Ok(self.durations.y),
            Gate::Rz(..) => Ok(self.durations.z),
            Gate::Cx(..) => Ok(self.durations.cx),
            Gate::U { .. } => Err(CompileError::GateNotNative(gate.name().to_string())),
        }
    }

    /// Total duration of a gate sequence.
    pub fn duration_of_sequence(&self, gates: &[Gate]) -> CompileResult<u64> {
        gates.iter().map(|g| self.duration_of(g)).sum()
    }

    /// Check that `qubit` exists on this target.
    pub fn validate_qubit(&self, qubit: QubitId) -> CompileResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
                gate_name: None,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for HardwareProfile {
    /// One qubit, `{X, Y, Z, CX}`, default durations.
    fn default() -> Self {
        Self {
            num_qubits: 1,
            basis: NativeBasis::Xyz,
            durations: GateDurations::default(),
        }
    }
}

impl TryFrom<HardwareConfig> for HardwareProfile {
    type Error = CompileError;

    fn try_from(config: HardwareConfig) -> CompileResult<Self> {
        Self::from_config(config)
    }
}

impl From<HardwareProfile> for HardwareConfig {
    fn from(profile: HardwareProfile) -> Self {
        let d = profile.durations;
        Self {
            num_qubits: profile.num_qubits,
            basis_gates: profile
                .basis
                .gate_names()
                .iter()
                .map(ToString::to_string)
                .collect(),
            durations: DurationsConfig {
                x: Some(d.x),
                y: Some(d.y),
                z: Some(d.z),
                cx: Some(d.cx),
            },
        }
    }
}
