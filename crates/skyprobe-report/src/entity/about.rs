// ── About entity ──

use indexmap::IndexMap;

use crate::context::ReportContext;
use crate::report::{AccessMode, DeviceReport, EntityKind, Rows};

/// Build the About tab from crate metadata. Never fails and carries no
/// modules; it closes every report.
pub fn report(ctx: &ReportContext<'_>) -> DeviceReport {
    let mut rows = Rows::new(ctx);
    rows.text(
        " ",
        format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    );
    rows.spacer();
    rows.text("Author", env!("CARGO_PKG_AUTHORS"));
    rows.text("Website", env!("CARGO_PKG_REPOSITORY"));

    DeviceReport {
        kind: EntityKind::About,
        display_name: ctx.text("About"),
        reachable: true,
        access: AccessMode::Local,
        sx_device: false,
        image: "about",
        primary: rows.into_rows(),
        modules: IndexMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::report::RowValue;

    #[test]
    fn about_is_always_reachable_with_no_modules() {
        let report = report(&ReportContext::new());
        assert!(report.reachable);
        assert!(!report.sx_device);
        assert_eq!(report.image, "about");
        assert!(report.modules.is_empty());

        assert_eq!(
            report.primary[0].value,
            RowValue::Text(format!(
                "{} v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
        );
        assert_eq!(report.primary[1].label, " ");
    }
}
