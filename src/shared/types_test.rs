//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::core::features::unit_converter::{CategoryGroup, Conversion, UnitCategory};
    use crate::core::state::Interaction;
    use crate::shared::settings::ConverterSettings;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // The bindings are written next to the web front end (web/src/types)
        UnitCategory::export().expect("Failed to export UnitCategory");
        CategoryGroup::export().expect("Failed to export CategoryGroup");
        Conversion::export().expect("Failed to export Conversion");
        Interaction::export().expect("Failed to export Interaction");
        ConverterView::export().expect("Failed to export ConverterView");
        HistoryEntry::export().expect("Failed to export HistoryEntry");
        ConverterSettings::export().expect("Failed to export ConverterSettings");
    }

    #[test]
    fn interaction_binding_is_tagged() {
        let decl = Interaction::decl();
        assert!(decl.contains("type"));
        assert!(decl.contains("SelectCategory"));
    }
}
