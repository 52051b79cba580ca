use uuid::Uuid;

/// Generated business identifier for an employee: `EMP` + 6 hex characters.
pub fn employee_id() -> String {
    tagged("EMP", 6)
}

/// Generated business identifier for a material: `MAT` + 8 hex characters.
pub fn material_id() -> String {
    tagged("MAT", 8)
}

// The suffix is random with no uniqueness retry; the UNIQUE constraint on the
// business-identifier column rejects the (unlikely) collision.
fn tagged(prefix: &str, len: usize) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", &hex[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn employee_id_matches_pattern() {
        let id = employee_id();
        assert_eq!(id.len(), 9);
        assert!(id.starts_with("EMP"));
        assert!(is_hex(&id[3..]));
    }

    #[test]
    fn material_id_matches_pattern() {
        let id = material_id();
        assert_eq!(id.len(), 11);
        assert!(id.starts_with("MAT"));
        assert!(is_hex(&id[3..]));
    }

    #[test]
    fn generated_ids_vary() {
        assert_ne!(employee_id(), employee_id());
    }
}
