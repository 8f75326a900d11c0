//! SET-clause builder for partial updates
//!
//! Both the task and user models update rows from payloads where every
//! field is optional. The statement must cover exactly the fields the
//! caller supplied: unsupplied fields keep their stored values, and an
//! empty field set is rejected before the store is touched.
//!
//! [`PatchSet`] collects the column names for the fields that are present
//! and renders the `col = $n` assignments with correct placeholder
//! numbering. Presence is decided by the caller (an explicit `Option` on
//! the update struct), never inferred from null, since null can be a
//! legitimate value for a nullable column.
//!
//! # Example
//!
//! ```
//! use taskdock_shared::db::patch::PatchSet;
//!
//! // $1 is reserved for the row id
//! let mut patch = PatchSet::new(2);
//! patch.push("title");
//! patch.push("completed");
//!
//! assert!(!patch.is_empty());
//! assert_eq!(patch.set_clause(), "title = $2, completed = $3");
//! ```

/// Accumulates the columns of a partial UPDATE statement
#[derive(Debug)]
pub struct PatchSet {
    columns: Vec<&'static str>,
    first_placeholder: usize,
}

impl PatchSet {
    /// Creates an empty patch set
    ///
    /// `first_placeholder` is the number the first pushed column binds to;
    /// lower numbers are reserved for the statement's fixed parameters
    /// (typically `$1` for the row id).
    pub fn new(first_placeholder: usize) -> Self {
        Self {
            columns: Vec::new(),
            first_placeholder,
        }
    }

    /// Adds a column to the patch
    ///
    /// Bind values in push order, after the statement's fixed parameters.
    pub fn push(&mut self, column: &'static str) {
        self.columns.push(column);
    }

    /// True when no field was supplied
    ///
    /// Callers must reject this case as a validation failure instead of
    /// issuing a no-op statement.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of columns in the patch
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Renders the `col = $n` assignments, comma-separated
    ///
    /// Callers prepend any fixed assignments of their own (e.g.
    /// `updated_at = NOW()`).
    pub fn set_clause(&self) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(offset, column)| format!("{} = ${}", column, self.first_placeholder + offset))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch() {
        let patch = PatchSet::new(2);
        assert!(patch.is_empty());
        assert_eq!(patch.len(), 0);
        assert_eq!(patch.set_clause(), "");
    }

    #[test]
    fn test_single_column() {
        let mut patch = PatchSet::new(2);
        patch.push("title");
        assert!(!patch.is_empty());
        assert_eq!(patch.set_clause(), "title = $2");
    }

    #[test]
    fn test_placeholder_numbering_follows_push_order() {
        let mut patch = PatchSet::new(2);
        patch.push("name");
        patch.push("email");
        patch.push("role");
        assert_eq!(patch.len(), 3);
        assert_eq!(patch.set_clause(), "name = $2, email = $3, role = $4");
    }

    #[test]
    fn test_first_placeholder_offset() {
        let mut patch = PatchSet::new(3);
        patch.push("completed");
        assert_eq!(patch.set_clause(), "completed = $3");
    }
}
