use serde::Deserialize;

/// A binding of one or more employees to a machine and a production item for
/// a shift, as returned by the remote system. Read-only on this side: the
/// console only displays assignments and appends production entries to them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: String,
    pub machine: Machine,
    #[serde(rename = "mainItem")]
    pub main_item: MainItem,
    #[serde(default)]
    pub employees: Vec<EmployeeRef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Machine {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// The production item an assignment runs, with its own inherited shift and
/// crew. Distinct from the shift the operator picks on a production entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MainItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "itemNo", default)]
    pub item_no: String,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub helper: String,
    #[serde(default)]
    pub company: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EmployeeRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Assignment {
    pub fn employee_ids(&self) -> Vec<String> {
        self.employees.iter().map(|e| e.id.clone()).collect()
    }

    /// Comma-joined employee names for card display.
    pub fn employee_names(&self) -> String {
        self.employees
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
