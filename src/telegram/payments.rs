//! Invoices, checkout queries and Telegram Stars.

use super::Telegram;
use crate::error::Result;
use crate::extra::ExtraInvoice;
use crate::request::Request;
use crate::types::NewInvoice;
use serde_json::Value;
use teloxide::types::{Message, Recipient, ShippingOption, UserId};

impl Telegram {
    pub async fn send_invoice(
        &self,
        chat_id: impl Into<Recipient>,
        invoice: NewInvoice,
        extra: Option<ExtraInvoice>,
    ) -> Result<Message> {
        let request = Request::new()
            .field("chat_id", chat_id.into())
            .extra(&invoice)
            .extra(&extra);
        self.call("sendInvoice", request).await
    }

    pub async fn create_invoice_link(&self, invoice: NewInvoice) -> Result<String> {
        let request = Request::new().extra(&invoice);
        self.call("createInvoiceLink", request).await
    }

    /// Replies to a shipping query of a flexible invoice. Pass the options
    /// when `ok`, an error message otherwise.
    pub async fn answer_shipping_query(
        &self,
        shipping_query_id: &str,
        ok: bool,
        shipping_options: Option<Vec<ShippingOption>>,
        error_message: Option<&str>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("shipping_query_id", shipping_query_id)
            .field("ok", ok)
            .opt_field("shipping_options", shipping_options)
            .opt_field("error_message", error_message);
        self.call("answerShippingQuery", request).await
    }

    /// Must be answered within 10 seconds of the query.
    pub async fn answer_pre_checkout_query(
        &self,
        pre_checkout_query_id: &str,
        ok: bool,
        error_message: Option<&str>,
    ) -> Result<bool> {
        let request = Request::new()
            .field("pre_checkout_query_id", pre_checkout_query_id)
            .field("ok", ok)
            .opt_field("error_message", error_message);
        self.call("answerPreCheckoutQuery", request).await
    }

    /// The bot's Telegram Stars balance as a raw `StarAmount`.
    pub async fn get_my_star_balance(&self) -> Result<Value> {
        self.call("getMyStarBalance", Request::new()).await
    }

    pub async fn get_star_transactions(
        &self,
        offset: Option<u32>,
        limit: Option<u8>,
    ) -> Result<Value> {
        let request = Request::new()
            .opt_field("offset", offset)
            .opt_field("limit", limit);
        self.call("getStarTransactions", request).await
    }

    pub async fn refund_star_payment(
        &self,
        user_id: UserId,
        telegram_payment_charge_id: &str,
    ) -> Result<bool> {
        let request = Request::new()
            .field("user_id", user_id)
            .field("telegram_payment_charge_id", telegram_payment_charge_id);
        self.call("refundStarPayment", request).await
    }

    /// Cancels or re-enables extension of a subscription paid in Stars.
    pub async fn edit_user_star_subscription(
        &self,
        user_id: UserId,
        telegram_payment_charge_id: &str,
        is_canceled: bool,
    ) -> Result<bool> {
        let request = Request::new()
            .field("user_id", user_id)
            .field("telegram_payment_charge_id", telegram_payment_charge_id)
            .field("is_canceled", is_canceled);
        self.call("editUserStarSubscription", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{RecordingDispatcher, message_json};
    use super::*;
    use crate::extra::ExtraInlineSend;
    use serde_json::json;
    use teloxide::types::{ChatId, LabeledPrice};

    fn stars_invoice() -> NewInvoice {
        NewInvoice {
            title: "Pro".to_string(),
            description: "One month of Pro".to_string(),
            payload: "pro-1m".to_string(),
            currency: "XTR".to_string(),
            prices: vec![LabeledPrice::new("Pro", 100)],
            ..NewInvoice::default()
        }
    }

    #[tokio::test]
    async fn invoice_fields_are_flattened() {
        let recorder = RecordingDispatcher::replying(message_json(1, 5));
        let extra = ExtraInvoice {
            send: ExtraInlineSend {
                protect_content: Some(true),
                ..ExtraInlineSend::default()
            },
            start_parameter: Some("pro".to_string()),
        };
        let _ = recorder
            .bot()
            .send_invoice(ChatId(1), stars_invoice(), Some(extra))
            .await;
        assert_eq!(
            recorder.last().body(),
            json!({
                "chat_id": 1,
                "title": "Pro",
                "description": "One month of Pro",
                "payload": "pro-1m",
                "currency": "XTR",
                "prices": [{"label": "Pro", "amount": 100}],
                "protect_content": true,
                "start_parameter": "pro"
            })
        );
    }

    #[tokio::test]
    async fn invoice_link_returns_url() {
        let recorder = RecordingDispatcher::replying(json!("https://t.me/$abc"));
        let mut invoice = stars_invoice();
        invoice.subscription_period = Some(2_592_000);
        let link = recorder.bot().create_invoice_link(invoice).await.unwrap();
        assert_eq!(link, "https://t.me/$abc");
        let body = recorder.last().body();
        assert_eq!(body["subscription_period"], json!(2_592_000));
        assert!(body.get("chat_id").is_none());
    }

    #[tokio::test]
    async fn failed_shipping_answer_carries_message() {
        let recorder = RecordingDispatcher::new();
        recorder
            .bot()
            .answer_shipping_query("sq1", false, None, Some("No delivery there"))
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({"shipping_query_id": "sq1", "ok": false, "error_message": "No delivery there"})
        );
    }

    #[tokio::test]
    async fn pre_checkout_ok() {
        let recorder = RecordingDispatcher::new();
        recorder
            .bot()
            .answer_pre_checkout_query("pq1", true, None)
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({"pre_checkout_query_id": "pq1", "ok": true})
        );
    }

    #[tokio::test]
    async fn star_balance_passes_through() {
        let reply = json!({"amount": 250, "nanostar_amount": 0});
        let recorder = RecordingDispatcher::replying(reply.clone());
        let balance = recorder.bot().get_my_star_balance().await.unwrap();
        assert_eq!(balance, reply);
        assert_eq!(recorder.last().method, "getMyStarBalance");
    }

    #[tokio::test]
    async fn subscription_cancel() {
        let recorder = RecordingDispatcher::new();
        recorder
            .bot()
            .edit_user_star_subscription(UserId(42), "ch_1", true)
            .await
            .unwrap();
        assert_eq!(
            recorder.last().body(),
            json!({"user_id": 42, "telegram_payment_charge_id": "ch_1", "is_canceled": true})
        );
    }
}
