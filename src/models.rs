//! Entity Models
//!
//! Backend-shaped records consumed by the console. Each entity is a flat
//! record with scalar fields plus denormalized display names (for example
//! `category_name` alongside `category_id`). Lifecycle and ownership are
//! backend-owned; the console mutates entities only via full-record
//! POST/PUT/DELETE calls.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recorded or planned expenditure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub amount: f64,
    pub status: PaymentStatus,
    pub description: String,
    /// Planned payment date (epoch ms)
    pub due_date: i64,
    /// Actual payment date, set once the payment reaches `Paid`
    #[serde(default)]
    pub paid_date: Option<i64>,
    pub category_id: u32,
    #[serde(default)]
    pub category_name: Option<String>,
    pub service_id: u32,
    #[serde(default)]
    pub service_name: Option<String>,
    pub contractor_id: u32,
    #[serde(default)]
    pub contractor_name: Option<String>,
    pub legal_entity_id: u32,
    #[serde(default)]
    pub legal_entity_name: Option<String>,
    pub department_id: u32,
    #[serde(default)]
    pub department_name: Option<String>,
    /// Values for admin-defined custom fields, keyed by field name
    #[serde(default)]
    pub custom_values: HashMap<String, serde_json::Value>,
    pub created_at: i64,
}

impl Payment {
    /// Date the payment counts against: actual pay date once paid,
    /// otherwise the planned due date
    pub fn effective_date(&self) -> i64 {
        self.paid_date.unwrap_or(self.due_date)
    }
}

/// Payment lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Paid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Draft => "Draft",
            PaymentStatus::Submitted => "Submitted",
            PaymentStatus::Approved => "Approved",
            PaymentStatus::Rejected => "Rejected",
            PaymentStatus::Paid => "Paid",
        }
    }

    /// Badge background class for status pills
    pub fn badge_class(&self) -> &'static str {
        match self {
            PaymentStatus::Draft => "bg-gray-500",
            PaymentStatus::Submitted => "bg-yellow-500",
            PaymentStatus::Approved => "bg-green-500",
            PaymentStatus::Rejected => "bg-red-500",
            PaymentStatus::Paid => "bg-blue-500",
        }
    }

    /// Draft and rejected payments can be edited and (re)submitted
    pub fn is_editable(&self) -> bool {
        matches!(self, PaymentStatus::Draft | PaymentStatus::Rejected)
    }

    pub fn can_submit(&self) -> bool {
        self.is_editable()
    }

    /// Submitted payments await an approve/reject decision
    pub fn can_decide(&self) -> bool {
        matches!(self, PaymentStatus::Submitted)
    }

    pub fn can_mark_paid(&self) -> bool {
        matches!(self, PaymentStatus::Approved)
    }
}

/// Status-transition log entry for a payment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub id: u32,
    pub payment_id: u32,
    pub action: ApprovalAction,
    pub actor_id: u32,
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Submitted,
    Approved,
    Rejected,
}

impl ApprovalAction {
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalAction::Submitted => "submitted",
            ApprovalAction::Approved => "approved",
            ApprovalAction::Rejected => "rejected",
        }
    }
}

/// Spend category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Paying legal entity of the organization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegalEntity {
    pub id: u32,
    pub name: String,
    pub tax_id: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// External vendor the organization pays
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub legal_entity_id: Option<u32>,
    #[serde(default)]
    pub legal_entity_name: Option<String>,
}

/// Internal customer department that consumes services
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub manager_name: Option<String>,
}

/// A billable IT offering (e.g. a SaaS subscription)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub contractor_id: Option<u32>,
    #[serde(default)]
    pub contractor_name: Option<String>,
    #[serde(default)]
    pub monthly_cost: Option<f64>,
    /// Ordered approver chain (user ids)
    #[serde(default)]
    pub approver_ids: Vec<u32>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A recorded reduction in cost attributed to a service and department
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Saving {
    pub id: u32,
    pub service_id: u32,
    #[serde(default)]
    pub service_name: Option<String>,
    pub department_id: u32,
    #[serde(default)]
    pub department_name: Option<String>,
    pub amount: f64,
    pub reason: String,
    /// Date the saving took effect (epoch ms)
    pub recorded_on: i64,
}

/// Admin-defined extra form field attachable to a payment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u32,
    /// Key the value is stored under in `Payment::custom_values`
    pub name: String,
    pub label: String,
    pub kind: CustomFieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub position: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CustomFieldKind {
    Text,
    Select { options: Vec<String> },
    File,
    Toggle,
}

impl CustomFieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            CustomFieldKind::Text => "Text",
            CustomFieldKind::Select { .. } => "Select",
            CustomFieldKind::File => "File",
            CustomFieldKind::Toggle => "Toggle",
        }
    }
}

/// Role grouping a set of permission strings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Known permission strings
pub mod permissions {
    pub const PAYMENTS_VIEW: &str = "payments.view";
    pub const PAYMENTS_EDIT: &str = "payments.edit";
    pub const PAYMENTS_APPROVE: &str = "payments.approve";
    pub const DIRECTORY_EDIT: &str = "directory.edit";
    pub const SAVINGS_EDIT: &str = "savings.edit";
    pub const TICKETS_EDIT: &str = "tickets.edit";
    pub const ADMIN_MANAGE: &str = "admin.manage";

    pub const ALL: [&str; 7] = [
        PAYMENTS_VIEW,
        PAYMENTS_EDIT,
        PAYMENTS_APPROVE,
        DIRECTORY_EDIT,
        SAVINGS_EDIT,
        TICKETS_EDIT,
        ADMIN_MANAGE,
    ];
}

/// Console user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role_id: u32,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Authenticated user plus effective permissions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Support ticket
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u32,
    pub subject: String,
    pub body: String,
    pub status: TicketStatus,
    pub author_id: u32,
    #[serde(default)]
    pub author_name: Option<String>,
    pub created_at: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TicketStatus::Open => "bg-yellow-500",
            TicketStatus::InProgress => "bg-blue-500",
            TicketStatus::Closed => "bg-gray-500",
        }
    }
}

/// Comment on a support ticket
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub ticket_id: u32,
    #[serde(default)]
    pub author_name: Option<String>,
    pub body: String,
    pub created_at: i64,
}

/// One card of the dashboard layout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardCard {
    pub id: u32,
    pub title: String,
    pub widget: WidgetKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Widget rendered inside a dashboard card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    SpendTotal,
    SpendByCategory,
    SpendByService,
    SpendByMonth,
    DailyTrend,
    RecentPayments,
    OpenApprovals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_wire_format() {
        let json = serde_json::to_string(&PaymentStatus::Submitted).unwrap();
        assert_eq!(json, "\"submitted\"");

        let status: PaymentStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn test_ticket_status_wire_format() {
        let json = serde_json::to_string(&TicketStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_custom_field_kind_parsing() {
        let kind: CustomFieldKind =
            serde_json::from_str(r#"{"type":"select","options":["PO","Invoice"]}"#).unwrap();
        assert_eq!(
            kind,
            CustomFieldKind::Select {
                options: vec!["PO".to_string(), "Invoice".to_string()]
            }
        );

        let kind: CustomFieldKind = serde_json::from_str(r#"{"type":"toggle"}"#).unwrap();
        assert_eq!(kind, CustomFieldKind::Toggle);
    }

    #[test]
    fn test_payment_defaults_on_sparse_record() {
        let payment: Payment = serde_json::from_str(
            r#"{
                "id": 1,
                "amount": 120.5,
                "status": "draft",
                "description": "Annual license",
                "due_date": 1700000000000,
                "category_id": 2,
                "service_id": 3,
                "contractor_id": 4,
                "legal_entity_id": 5,
                "department_id": 6,
                "created_at": 1699000000000
            }"#,
        )
        .unwrap();

        assert_eq!(payment.paid_date, None);
        assert!(payment.custom_values.is_empty());
        assert_eq!(payment.category_name, None);
    }

    #[test]
    fn test_payment_lifecycle_gates() {
        assert!(PaymentStatus::Draft.can_submit());
        assert!(PaymentStatus::Rejected.can_submit());
        assert!(!PaymentStatus::Submitted.can_submit());

        assert!(PaymentStatus::Submitted.can_decide());
        assert!(!PaymentStatus::Approved.can_decide());

        assert!(PaymentStatus::Approved.can_mark_paid());
        assert!(!PaymentStatus::Paid.can_mark_paid());
    }

    #[test]
    fn test_badge_classes_are_distinct_per_status() {
        let classes = [
            PaymentStatus::Draft.badge_class(),
            PaymentStatus::Submitted.badge_class(),
            PaymentStatus::Approved.badge_class(),
            PaymentStatus::Rejected.badge_class(),
            PaymentStatus::Paid.badge_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
