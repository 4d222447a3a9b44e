use serde_json::Value;

use crate::http::{first_item, to_params};
use crate::pagination::fetch_all;
use crate::{Client, Result};

impl Client {
    /// Fetch one page of accounts. `options` are forwarded verbatim as query
    /// parameters and the payload is returned with its pagination envelope
    /// intact.
    pub fn get_accounts(&self, options: &[(&str, &str)]) -> Result<Value> {
        self.get("accounts", to_params(options))
    }

    /// Fetch every account, walking all pages at the maximum page size.
    pub fn get_all_accounts(&self, options: &[(&str, &str)]) -> Result<Vec<Value>> {
        fetch_all(
            |params| self.get("accounts", params),
            "accounts",
            "accounts_per_page",
            options,
        )
    }

    pub fn get_account(&self, account_id: u64) -> Result<Value> {
        let body = self.get(&format!("accounts/{account_id}"), Vec::new())?;
        first_item(body, "accounts")
    }

    pub fn create_account(&self, account_name: &str, create_profile: bool) -> Result<Value> {
        let params = vec![
            ("account_name".to_string(), account_name.to_string()),
            ("create_profile".to_string(), create_profile.to_string()),
        ];
        self.post("accounts", params)
    }

    /// Rename an account. `account_name` is the only editable field.
    pub fn edit_account(&self, account_id: u64, account_name: &str) -> Result<Value> {
        let params = vec![("account_name".to_string(), account_name.to_string())];
        self.post(&format!("accounts/{account_id}"), params)
    }

    pub fn delete_account(&self, account_id: u64) -> Result<Value> {
        self.delete(&format!("accounts/{account_id}"))
    }
}
