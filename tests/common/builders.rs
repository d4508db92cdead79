// tests/common/builders.rs
// Builders for users tables.

/// Builds the text of a users CSV file row by row.
#[allow(dead_code)]
pub struct UsersCsvBuilder {
    header: String,
    rows: Vec<String>,
}

#[allow(dead_code)]
impl UsersCsvBuilder {
    pub fn new() -> Self {
        Self { header: "name,age,country".to_string(), rows: Vec::new() }
    }

    /// Replace the header line, e.g. to add or reorder columns.
    pub fn header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    pub fn user(mut self, name: &str, age: &str, country: &str) -> Self {
        self.rows.push(format!("{name},{age},{country}"));
        self
    }

    /// Append a line verbatim.
    pub fn raw(mut self, line: &str) -> Self {
        self.rows.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut out = self.header.clone();
        out.push('\n');
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }
}

impl Default for UsersCsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The three-user table used across end-to-end checks.
#[allow(dead_code)]
pub fn abc_users() -> UsersCsvBuilder {
    UsersCsvBuilder::new()
        .user("A", "25", "USA")
        .user("B", "31", "Finland")
        .user("C", "40", "Brazil")
}
