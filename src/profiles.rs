//! Profiles are sub-resources of accounts; every path is scoped under
//! `accounts/{account_id}`.

use serde_json::Value;

use crate::http::{first_item, to_params};
use crate::pagination::fetch_all;
use crate::{Client, Result};

impl Client {
    /// Fetch one page of an account's profiles, options forwarded verbatim.
    pub fn get_profiles(&self, account_id: u64, options: &[(&str, &str)]) -> Result<Value> {
        self.get(&format!("accounts/{account_id}/profiles"), to_params(options))
    }

    /// Fetch every profile under an account, walking all pages.
    pub fn get_all_profiles(&self, account_id: u64, options: &[(&str, &str)]) -> Result<Vec<Value>> {
        fetch_all(
            |params| self.get(&format!("accounts/{account_id}/profiles"), params),
            "profiles",
            "profiles_per_page",
            options,
        )
    }

    pub fn get_profile(&self, account_id: u64, profile_id: u64) -> Result<Value> {
        let body = self.get(
            &format!("accounts/{account_id}/profiles/{profile_id}"),
            Vec::new(),
        )?;
        first_item(body, "profiles")
    }

    pub fn create_profile(&self, account_id: u64, profile_name: &str) -> Result<Value> {
        let params = vec![("profile_name".to_string(), profile_name.to_string())];
        self.post(&format!("accounts/{account_id}/profiles"), params)
    }

    /// Rename a profile. `profile_name` is the only editable field.
    pub fn edit_profile(
        &self,
        account_id: u64,
        profile_id: u64,
        profile_name: &str,
    ) -> Result<Value> {
        let params = vec![("profile_name".to_string(), profile_name.to_string())];
        self.post(
            &format!("accounts/{account_id}/profiles/{profile_id}"),
            params,
        )
    }

    /// Delete a profile along with all numbers, leads, and settings
    /// associated with it.
    pub fn delete_profile(&self, account_id: u64, profile_id: u64) -> Result<Value> {
        self.delete(&format!("accounts/{account_id}/profiles/{profile_id}"))
    }
}
