//! Display projection for the client detail modal.
//!
//! [`build_client_view`] decides which fields a client shows, in which order,
//! at which width and with which icon. Templates and the JSON endpoint only
//! iterate over the result.

use chrono::{DateTime, Locale, Utc};
use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::types::{ClientId, ClientType};

/// Shown for absent values of always-visible fields.
pub const FALLBACK_TEXT: &str = "N/A";

/// Locale used for the registration date.
pub const DISPLAY_LOCALE: Locale = Locale::es_CO;

const REGISTERED_AT_FORMAT: &str = "%-d de %B de %Y, %H:%M";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    AssistanceCode,
    InternalCode,
    Contact,
    Address,
    RegisteredAt,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldWidth {
    Full,
    Half,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldIcon {
    Business,
    Person,
    Badge,
    Tag,
    Email,
    Phone,
    Location,
    Calendar,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Primary,
    Secondary,
}

/// Visual treatment of the client type.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TypeBadge {
    pub label: &'static str,
    pub color: BadgeColor,
    pub icon: FieldIcon,
}

impl TypeBadge {
    pub fn for_type(client_type: ClientType) -> Self {
        match client_type {
            ClientType::Organization => Self {
                label: "Organization",
                color: BadgeColor::Primary,
                icon: FieldIcon::Business,
            },
            ClientType::Individual => Self {
                label: "Individual",
                color: BadgeColor::Secondary,
                icon: FieldIcon::Person,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub label: &'static str,
    pub value: String,
    pub width: FieldWidth,
    pub icon: FieldIcon,
}

impl FieldDescriptor {
    fn full(kind: FieldKind, label: &'static str, icon: FieldIcon, value: String) -> Self {
        Self {
            kind,
            label,
            value,
            width: FieldWidth::Full,
            icon,
        }
    }
}

/// Everything the modal renders for one client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClientView {
    pub client_id: ClientId,
    pub visible: bool,
    pub badge: TypeBadge,
    pub fields: Vec<FieldDescriptor>,
}

impl ClientView {
    pub fn field(&self, kind: FieldKind) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.kind == kind)
    }
}

/// Blank and whitespace-only text counts as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn or_fallback(value: Option<&str>) -> String {
    present(value).unwrap_or(FALLBACK_TEXT).to_string()
}

/// Email-looking contacts get the mail icon, everything else the phone icon.
pub fn contact_icon(contact: Option<&str>) -> FieldIcon {
    match contact {
        Some(contact) if contact.contains('@') => FieldIcon::Email,
        _ => FieldIcon::Phone,
    }
}

/// Long-form registration date, e.g. `5 de marzo de 2024, 14:30`.
pub fn format_registered_at(created_at: &DateTime<Utc>) -> String {
    created_at
        .format_localized(REGISTERED_AT_FORMAT, DISPLAY_LOCALE)
        .to_string()
}

/// Projects a client into the fields its modal shows.
///
/// Returns `None` when there is no client, whatever `visible` says. The
/// assistance code is shown only for organizations that have one and is
/// omitted otherwise rather than falling back to [`FALLBACK_TEXT`]; when it
/// is shown it shares the row with the internal code. The registration date
/// is likewise omitted when unknown.
pub fn build_client_view(client: Option<&Client>, visible: bool) -> Option<ClientView> {
    let client = client?;

    let assistance_code =
        present(client.assistance_code.as_deref()).filter(|_| client.is_organization());

    let mut fields = Vec::with_capacity(6);

    fields.push(FieldDescriptor::full(
        FieldKind::Name,
        "Name",
        FieldIcon::Badge,
        or_fallback(client.name.as_deref()),
    ));

    let internal_code_width = match assistance_code {
        Some(code) => {
            fields.push(FieldDescriptor {
                kind: FieldKind::AssistanceCode,
                label: "Assistance code",
                value: code.to_string(),
                width: FieldWidth::Half,
                icon: FieldIcon::Tag,
            });
            FieldWidth::Half
        }
        None => FieldWidth::Full,
    };

    fields.push(FieldDescriptor {
        kind: FieldKind::InternalCode,
        label: "Internal code",
        value: or_fallback(client.internal_code.as_deref()),
        width: internal_code_width,
        icon: FieldIcon::Tag,
    });

    fields.push(FieldDescriptor::full(
        FieldKind::Contact,
        "Contact",
        contact_icon(client.contact.as_deref()),
        or_fallback(client.contact.as_deref()),
    ));

    fields.push(FieldDescriptor::full(
        FieldKind::Address,
        "Address",
        FieldIcon::Location,
        or_fallback(client.address.as_deref()),
    ));

    if let Some(created_at) = &client.created_at {
        fields.push(FieldDescriptor::full(
            FieldKind::RegisteredAt,
            "Registered",
            FieldIcon::Calendar,
            format_registered_at(created_at),
        ));
    }

    Some(ClientView {
        client_id: client.id,
        visible,
        badge: TypeBadge::for_type(client.client_type),
        fields,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn client(client_type: ClientType) -> Client {
        Client {
            id: ClientId::new(1).unwrap(),
            client_type,
            name: Some("Fundación Luz".to_string()),
            assistance_code: Some("AS-001".to_string()),
            internal_code: Some("INT-9".to_string()),
            contact: Some("info@luz.org".to_string()),
            address: Some("Calle 10 # 5-20".to_string()),
            created_at: None,
        }
    }

    fn kinds(view: &ClientView) -> Vec<FieldKind> {
        view.fields.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn no_client_renders_nothing() {
        assert_eq!(build_client_view(None, true), None);
        assert_eq!(build_client_view(None, false), None);
    }

    #[test]
    fn individual_never_shows_assistance_code() {
        let view = build_client_view(Some(&client(ClientType::Individual)), true).unwrap();

        assert!(view.field(FieldKind::AssistanceCode).is_none());
        assert_eq!(
            view.field(FieldKind::InternalCode).unwrap().width,
            FieldWidth::Full
        );
        assert_eq!(view.badge, TypeBadge::for_type(ClientType::Individual));
        assert_eq!(view.badge.label, "Individual");
    }

    #[test]
    fn organization_with_code_splits_the_row() {
        let view = build_client_view(Some(&client(ClientType::Organization)), true).unwrap();

        assert_eq!(
            kinds(&view),
            vec![
                FieldKind::Name,
                FieldKind::AssistanceCode,
                FieldKind::InternalCode,
                FieldKind::Contact,
                FieldKind::Address,
            ]
        );
        let assistance = view.field(FieldKind::AssistanceCode).unwrap();
        assert_eq!(assistance.value, "AS-001");
        assert_eq!(assistance.width, FieldWidth::Half);
        assert_eq!(
            view.field(FieldKind::InternalCode).unwrap().width,
            FieldWidth::Half
        );
        assert_eq!(view.badge.label, "Organization");
        assert_eq!(view.badge.color, BadgeColor::Primary);
    }

    #[test]
    fn organization_without_code_omits_it() {
        let mut org = client(ClientType::Organization);
        org.assistance_code = None;
        let view = build_client_view(Some(&org), true).unwrap();

        assert!(view.field(FieldKind::AssistanceCode).is_none());
        assert_eq!(
            view.field(FieldKind::InternalCode).unwrap().width,
            FieldWidth::Full
        );
    }

    #[test]
    fn blank_name_falls_back_to_placeholder() {
        let mut c = client(ClientType::Individual);
        c.name = Some(String::new());
        c.address = Some("  ".to_string());
        let view = build_client_view(Some(&c), true).unwrap();

        assert_eq!(view.field(FieldKind::Name).unwrap().value, FALLBACK_TEXT);
        assert_eq!(view.field(FieldKind::Address).unwrap().value, FALLBACK_TEXT);
    }

    #[test]
    fn organization_with_blank_code_omits_it() {
        let mut org = client(ClientType::Organization);
        org.name = Some(String::new());
        org.assistance_code = Some("   ".to_string());
        org.internal_code = None;
        let view = build_client_view(Some(&org), true).unwrap();

        assert!(view.field(FieldKind::AssistanceCode).is_none());
        let internal = view.field(FieldKind::InternalCode).unwrap();
        assert_eq!(internal.width, FieldWidth::Full);
        assert_eq!(internal.value, FALLBACK_TEXT);
        assert_eq!(view.field(FieldKind::Name).unwrap().value, FALLBACK_TEXT);
    }

    #[test]
    fn contact_icon_follows_at_sign() {
        let mut c = client(ClientType::Individual);
        let view = build_client_view(Some(&c), true).unwrap();
        let contact = view.field(FieldKind::Contact).unwrap();
        assert_eq!(contact.icon, FieldIcon::Email);
        assert_eq!(contact.value, "info@luz.org");

        c.contact = Some("+57 300 123 4567".to_string());
        let view = build_client_view(Some(&c), true).unwrap();
        let contact = view.field(FieldKind::Contact).unwrap();
        assert_eq!(contact.icon, FieldIcon::Phone);
        assert_eq!(contact.value, "+57 300 123 4567");
    }

    #[test]
    fn absent_values_fall_back_to_placeholder() {
        let bare = Client {
            id: ClientId::new(2).unwrap(),
            client_type: ClientType::Individual,
            name: None,
            assistance_code: None,
            internal_code: None,
            contact: None,
            address: None,
            created_at: None,
        };
        let view = build_client_view(Some(&bare), false).unwrap();

        assert!(!view.visible);
        assert_eq!(
            kinds(&view),
            vec![
                FieldKind::Name,
                FieldKind::InternalCode,
                FieldKind::Contact,
                FieldKind::Address,
            ]
        );
        assert!(view.fields.iter().all(|f| f.value == FALLBACK_TEXT));
        assert_eq!(view.field(FieldKind::Contact).unwrap().icon, FieldIcon::Phone);
    }

    #[test]
    fn registration_date_uses_long_spanish_format() {
        let mut c = client(ClientType::Individual);
        c.created_at = Some(Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap());
        let view = build_client_view(Some(&c), true).unwrap();

        let registered = view.field(FieldKind::RegisteredAt).unwrap();
        assert_eq!(registered.value, "5 de marzo de 2024, 14:30");
        assert_eq!(view.fields.last().unwrap().kind, FieldKind::RegisteredAt);
    }

    #[test]
    fn building_the_view_leaves_the_client_untouched() {
        let original = client(ClientType::Organization);
        let copy = original.clone();
        let _ = build_client_view(Some(&original), true);
        assert_eq!(original, copy);
    }
}
