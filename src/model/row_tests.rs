//! Tests for row field resolution and cell style derivation.

use super::*;
use crate::model::EditActionStyle;

#[derive(Debug, Clone)]
struct Contact {
    name: String,
    email: Option<String>,
    favorite: bool,
}

fn contact(name: &str, email: Option<&str>) -> Contact {
    Contact {
        name: name.to_string(),
        email: email.map(str::to_string),
        favorite: false,
    }
}

fn bound_contact_row(contact: Contact) -> Row<Contact> {
    Row::builder(contact)
        .title_with(|c| c.name.clone())
        .subtitle_with(|c| c.email.clone())
        .accessory_with(|c| {
            if c.favorite {
                Accessory::Checkmark
            } else {
                Accessory::None
            }
        })
        .build()
}

// ===== Cell style =====

#[test]
fn title_with_blank_subtitle_uses_default_style() {
    let row = Row::new("Title", "");
    assert_eq!(row.cell_style(), CellStyle::Default);
}

#[test]
fn title_with_subtitle_uses_subtitle_style() {
    let row = Row::new("Title", "Sub");
    assert_eq!(row.cell_style(), CellStyle::Subtitle);
}

#[test]
fn absent_title_and_subtitle_use_default_style() {
    let row = Row::default();
    assert_eq!(row.cell_style(), CellStyle::Default);
}

#[test]
fn whitespace_only_counts_as_blank() {
    assert_eq!(Row::new("  ", "Sub").cell_style(), CellStyle::Default);
    assert_eq!(Row::new("Title", " \t").cell_style(), CellStyle::Default);
}

#[test]
fn explicit_style_skips_derivation() {
    let row = Row::builder(()).title("Only").cell_style(CellStyle::Subtitle).build();
    assert_eq!(row.cell_style(), CellStyle::Subtitle);
}

#[test]
fn bound_row_style_is_frozen_at_construction() {
    let mut row = bound_contact_row(contact("Ada", Some("ada@example.com")));
    assert_eq!(row.cell_style(), CellStyle::Subtitle);

    row.item_mut().email = None;
    row.item_mut().name = String::new();

    assert_eq!(row.subtitle(), None);
    assert_eq!(row.cell_style(), CellStyle::Subtitle, "style is never re-derived");
}

// ===== Frozen values =====

#[test]
fn static_row_returns_constructor_values() {
    let row = Row::new("Inbox", "3 unread")
        .with_accessory(Accessory::DisclosureIndicator)
        .with_reuse_identifier("mail");

    assert_eq!(row.title(), "Inbox");
    assert_eq!(row.subtitle(), Some("3 unread".to_string()));
    assert_eq!(row.accessory(), Accessory::DisclosureIndicator);
    assert_eq!(row.reuse_identifier(), Some("mail".to_string()));
}

#[test]
fn frozen_fields_ignore_item_mutation() {
    let mut row = Row::builder(contact("Ada", None)).title("Ada").build();
    row.item_mut().name = "Grace".to_string();
    assert_eq!(row.title(), "Ada");
}

#[test]
fn absent_values_resolve_to_empty() {
    let row = Row::default();
    assert_eq!(row.title(), "");
    assert_eq!(row.subtitle(), None);
    assert_eq!(row.accessory(), Accessory::None);
    assert_eq!(row.reuse_identifier(), None);
    assert!(row.image().is_none());
}

// ===== Live values =====

#[test]
fn live_fields_track_current_item() {
    let mut row = bound_contact_row(contact("Ada", None));
    assert_eq!(row.title(), "Ada");
    assert_eq!(row.accessory(), Accessory::None);

    row.item_mut().name = "Ada Lovelace".to_string();
    row.item_mut().favorite = true;
    row.item_mut().email = Some("ada@example.com".to_string());

    assert_eq!(row.title(), "Ada Lovelace");
    assert_eq!(row.accessory(), Accessory::Checkmark);
    assert_eq!(row.subtitle(), Some("ada@example.com".to_string()));
}

#[test]
fn bound_shorthand_binds_title() {
    let mut row = Row::bound(7_u32, |n| format!("#{n}"));
    assert_eq!(row.title(), "#7");
    *row.item_mut() = 8;
    assert_eq!(row.title(), "#8");
}

#[test]
fn rebinding_title_replaces_frozen_value() {
    let mut row = Row::builder(contact("Ada", None)).title("frozen").build();
    row.bind_title(|c| c.name.to_uppercase());
    assert_eq!(row.title(), "ADA");
}

// ===== Pinning =====

#[test]
fn pinned_accessory_wins_over_binding() {
    let mut row = bound_contact_row(contact("Ada", None));
    row.set_accessory(Accessory::DetailButton);

    row.item_mut().favorite = true;
    assert_eq!(row.accessory(), Accessory::DetailButton);
}

#[test]
fn last_write_wins_between_pin_and_bind() {
    let mut row = bound_contact_row(contact("Ada", None));
    row.set_accessory(Accessory::DetailButton);
    row.bind_accessory(|c| {
        if c.favorite {
            Accessory::Checkmark
        } else {
            Accessory::DisclosureIndicator
        }
    });

    assert_eq!(row.accessory(), Accessory::DisclosureIndicator);
}

#[test]
fn pinned_reuse_identifier_wins_over_binding() {
    let mut row = Row::builder(contact("Ada", None))
        .reuse_identifier_with(|c| Some(c.name.clone()))
        .build();
    assert_eq!(row.reuse_identifier(), Some("Ada".to_string()));

    row.set_reuse_identifier(Some("fixed".to_string()));
    row.item_mut().name = "Grace".to_string();
    assert_eq!(row.reuse_identifier(), Some("fixed".to_string()));
}

#[test]
fn reuse_identifier_fn_helper_binds() {
    let mut row = Row::bound(contact("Ada", None), |c| c.name.clone())
        .with_reuse_identifier_fn(|c| c.favorite.then(|| "favorite".to_string()));
    assert_eq!(row.reuse_identifier(), None);
    row.item_mut().favorite = true;
    assert_eq!(row.reuse_identifier(), Some("favorite".to_string()));
}

// ===== Edit actions =====

#[test]
fn edit_actions_default_to_empty() {
    let row = Row::titled("Plain");
    assert!(row.edit_actions().is_empty());
}

#[test]
fn pinned_edit_actions_replace_binding() {
    let mut row = Row::builder(contact("Ada", None))
        .edit_actions_with(|c| {
            if c.favorite {
                vec![EditAction::new("Unfavorite", EditActionStyle::Normal)]
            } else {
                Vec::new()
            }
        })
        .build();
    row.item_mut().favorite = true;
    assert_eq!(row.edit_actions().len(), 1);

    row.set_edit_actions(vec![
        EditAction::new("Delete", EditActionStyle::Destructive),
        EditAction::new("Archive", EditActionStyle::Normal),
    ]);
    row.item_mut().favorite = false;

    let titles: Vec<String> = row
        .edit_actions()
        .iter()
        .map(|a| a.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Delete", "Archive"]);
}

// ===== Images =====

#[test]
fn with_image_sets_image() {
    let row = Row::titled("Starred").with_image(ImageHandle::new("★"));
    assert_eq!(row.image().map(ImageHandle::as_str), Some("★"));
}

#[test]
fn set_image_none_removes_image() {
    let mut row = Row::titled("Starred").with_image(ImageHandle::new("★"));
    row.set_image(None);
    assert!(row.image().is_none());
}

#[test]
fn clone_keeps_bindings() {
    let row = bound_contact_row(contact("Ada", None));
    let mut cloned = row.clone();
    cloned.item_mut().name = "Grace".to_string();
    assert_eq!(row.title(), "Ada");
    assert_eq!(cloned.title(), "Grace");
}
