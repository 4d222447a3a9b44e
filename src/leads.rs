use serde_json::Value;

use crate::http::{first_item, to_params};
use crate::pagination::fetch_all;
use crate::{Client, Result};

impl Client {
    /// Fetch one page of leads. `options` are forwarded verbatim as query
    /// parameters; see the WhatConverts leads documentation for the
    /// supported filters.
    pub fn get_leads(&self, options: &[(&str, &str)]) -> Result<Value> {
        self.get("leads", to_params(options))
    }

    /// Fetch every lead matching `options`, walking all pages.
    pub fn get_all_leads(&self, options: &[(&str, &str)]) -> Result<Vec<Value>> {
        fetch_all(
            |params| self.get("leads", params),
            "leads",
            "leads_per_page",
            options,
        )
    }

    pub fn get_lead(&self, lead_id: u64) -> Result<Value> {
        let body = self.get(&format!("leads/{lead_id}"), Vec::new())?;
        first_item(body, "leads")
    }

    /// Create a lead under a profile. The explicit `profile_id` and
    /// `lead_type` arguments win over any same-named keys in `attributes`.
    pub fn create_lead(
        &self,
        profile_id: u64,
        lead_type: &str,
        attributes: &[(&str, &str)],
    ) -> Result<Value> {
        let mut params = vec![
            ("profile_id".to_string(), profile_id.to_string()),
            ("lead_type".to_string(), lead_type.to_string()),
        ];
        params.extend(
            attributes
                .iter()
                .filter(|(key, _)| *key != "profile_id" && *key != "lead_type")
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        self.post("leads", params)
    }

    /// Update lead fields; `attributes` pass through verbatim as form
    /// fields.
    pub fn edit_lead(&self, lead_id: u64, attributes: &[(&str, &str)]) -> Result<Value> {
        self.post(&format!("leads/{lead_id}"), to_params(attributes))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::http::HttpMethod;
    use crate::test_support::{mock_client, MockTransport};

    #[test]
    fn get_leads_forwards_options_verbatim() {
        let transport = MockTransport::new();
        transport.push_response(
            200,
            &json!({"leads": [], "total_pages": 0}).to_string(),
        );
        let client = mock_client(&transport);

        client
            .get_leads(&[("lead_type", "phone_call"), ("per_page", "10")])
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::GET);
        assert_eq!(request.url, "https://api.test/v1/leads");
        assert_eq!(
            request.params,
            vec![
                ("lead_type".to_string(), "phone_call".to_string()),
                ("per_page".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn get_all_leads_concatenates_pages_in_order() {
        let transport = MockTransport::new();
        transport.push_response(
            200,
            &json!({
                "leads": [{"lead_id": 1}, {"lead_id": 2}],
                "total_pages": 3,
            })
            .to_string(),
        );
        transport.push_response(
            200,
            &json!({"leads": [{"lead_id": 3}], "total_pages": 3}).to_string(),
        );
        transport.push_response(
            200,
            &json!({"leads": [{"lead_id": 4}], "total_pages": 3}).to_string(),
        );
        let client = mock_client(&transport);

        let leads = client.get_all_leads(&[("lead_type", "web_form")]).unwrap();
        assert_eq!(leads.len(), 4);
        assert_eq!(leads[3]["lead_id"], 4);

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        for (request, page) in requests.iter().zip(["1", "2", "3"]) {
            assert!(request
                .params
                .contains(&("page_number".to_string(), page.to_string())));
            assert!(request
                .params
                .contains(&("leads_per_page".to_string(), "250".to_string())));
            assert!(request
                .params
                .contains(&("lead_type".to_string(), "web_form".to_string())));
        }
    }

    #[test]
    fn get_lead_unwraps_the_singleton_array() {
        let transport = MockTransport::new();
        transport.push_response(
            200,
            &json!({"leads": [{"lead_id": 44444, "lead_type": "phone_call"}]}).to_string(),
        );
        let client = mock_client(&transport);

        let lead = client.get_lead(44444).unwrap();
        assert_eq!(lead["lead_id"], 44444);
        assert_eq!(transport.requests()[0].url, "https://api.test/v1/leads/44444");
    }

    #[test]
    fn create_lead_merges_attributes_after_explicit_fields() {
        let transport = MockTransport::new();
        transport.push_response(
            200,
            &json!({"lead_id": 90210, "lead_type": "web_form"}).to_string(),
        );
        let client = mock_client(&transport);

        let lead = client
            .create_lead(55555, "web_form", &[("form_name", "Quote Form")])
            .unwrap();
        assert_eq!(lead["lead_id"], 90210);

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::POST);
        assert_eq!(request.url, "https://api.test/v1/leads");
        assert_eq!(
            request.params,
            vec![
                ("profile_id".to_string(), "55555".to_string()),
                ("lead_type".to_string(), "web_form".to_string()),
                ("form_name".to_string(), "Quote Form".to_string()),
            ]
        );
    }

    #[test]
    fn create_lead_discards_caller_copies_of_reserved_fields() {
        let transport = MockTransport::new();
        transport.push_response(200, &json!({"lead_id": 1}).to_string());
        let client = mock_client(&transport);

        client
            .create_lead(
                55555,
                "web_form",
                &[
                    ("profile_id", "99999"),
                    ("lead_type", "chat"),
                    ("form_name", "Quote Form"),
                ],
            )
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(
            request.params,
            vec![
                ("profile_id".to_string(), "55555".to_string()),
                ("lead_type".to_string(), "web_form".to_string()),
                ("form_name".to_string(), "Quote Form".to_string()),
            ]
        );
    }

    #[test]
    fn edit_lead_posts_attributes_verbatim() {
        let transport = MockTransport::new();
        transport.push_response(200, &json!({"lead_id": 44444}).to_string());
        let client = mock_client(&transport);

        client
            .edit_lead(44444, &[("lead_status", "quotable"), ("quote_value", "500")])
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::POST);
        assert_eq!(request.url, "https://api.test/v1/leads/44444");
        assert_eq!(
            request.params,
            vec![
                ("lead_status".to_string(), "quotable".to_string()),
                ("quote_value".to_string(), "500".to_string()),
            ]
        );
    }
}
