use mlfold::core::domain::PhaseConfig;

/// Builds a configuration from its phases and the four output powers in
/// truth-table order (p00, p10, p01, p11).
pub fn config(phi_a: f64, phi_b: f64, powers: [f64; 4]) -> PhaseConfig {
    PhaseConfig {
        phi_a,
        phi_b,
        p00: powers[0],
        p10: powers[1],
        p01: powers[2],
        p11: powers[3],
    }
}
