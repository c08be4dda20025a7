use std::collections::HashSet;

const PADDING_SIDES: &[&str] = &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"];
const MARGIN_SIDES: &[&str] = &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const ROUNDED: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const SHADOW: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BORDER_WIDTH: &[&str] = &["0", "2", "4", "8"];
const FLEX_DIRECTION: &[&str] = &["row", "row-reverse", "col", "col-reverse"];

/// Prefixes whose utilities all belong to one group, longest first.
const SIMPLE: &[&str] = &[
    "min-w", "min-h", "max-w", "max-h", "gap-x", "gap-y", "gap", "w", "h", "z", "opacity",
    "leading", "tracking", "items", "justify", "top", "right", "bottom", "left", "inset",
];

fn value<'a>(class: &'a str, prefix: &str) -> Option<&'a str> {
    class
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
}

/// Conflict group of a utility (without variants) and the narrower groups it
/// also overrides. Unknown classes have no group and never conflict.
fn group(class: &str) -> Option<(String, &'static [&'static str])> {
    let class = class.strip_prefix('!').unwrap_or(class);
    let class = class.strip_prefix('-').unwrap_or(class);

    if value(class, "p").is_some() {
        return Some(("p".into(), PADDING_SIDES));
    }
    if let Some(side) = PADDING_SIDES.iter().find(|s| value(class, s).is_some()) {
        let covers: &'static [&'static str] = match *side {
            "px" => &["pl", "pr", "ps", "pe"],
            "py" => &["pt", "pb"],
            _ => &[],
        };
        return Some(((*side).into(), covers));
    }

    if value(class, "m").is_some() {
        return Some(("m".into(), MARGIN_SIDES));
    }
    if let Some(side) = MARGIN_SIDES.iter().find(|s| value(class, s).is_some()) {
        let covers: &'static [&'static str] = match *side {
            "mx" => &["ml", "mr", "ms", "me"],
            "my" => &["mt", "mb"],
            _ => &[],
        };
        return Some(((*side).into(), covers));
    }

    if let Some(v) = value(class, "text") {
        let group = if FONT_SIZES.contains(&v) {
            "font-size"
        } else if TEXT_ALIGN.contains(&v) {
            "text-align"
        } else {
            "text-color"
        };
        return Some((group.into(), &[]));
    }

    if let Some(v) = value(class, "font") {
        let group = if FONT_WEIGHTS.contains(&v) {
            "font-weight"
        } else {
            "font-family"
        };
        return Some((group.into(), &[]));
    }

    if let Some(v) = value(class, "bg") {
        let group = match v {
            "cover" | "contain" | "auto" => "bg-size",
            _ => "bg-color",
        };
        return Some((group.into(), &[]));
    }

    if DISPLAY.contains(&class) {
        return Some(("display".into(), &[]));
    }
    if POSITION.contains(&class) {
        return Some(("position".into(), &[]));
    }

    if let Some(v) = value(class, "flex")
        && FLEX_DIRECTION.contains(&v)
    {
        return Some(("flex-direction".into(), &[]));
    }

    if class == "rounded" || value(class, "rounded").is_some_and(|v| ROUNDED.contains(&v)) {
        return Some(("rounded".into(), &[]));
    }

    if class == "shadow" || value(class, "shadow").is_some_and(|v| SHADOW.contains(&v)) {
        return Some(("shadow".into(), &[]));
    }

    if class == "border" || value(class, "border").is_some_and(|v| BORDER_WIDTH.contains(&v)) {
        return Some(("border-width".into(), &[]));
    }
    if value(class, "border").is_some() {
        return Some(("border-color".into(), &[]));
    }

    if let Some(prefix) = SIMPLE.iter().find(|p| value(class, p).is_some()) {
        let covers: &'static [&'static str] = match *prefix {
            "gap" => &["gap-x", "gap-y"],
            _ => &[],
        };
        return Some(((*prefix).into(), covers));
    }

    None
}

/// Joins Tailwind class lists, dropping utilities overridden by a later one.
///
/// The last class of a conflict group wins, scoped by its variant prefix
/// (`hover:`, `md:` ...). A shorthand such as `p-4` also removes earlier
/// `px-*`/`py-*`/`pt-*` utilities, while a later axis utility only replaces
/// its own axis.
pub fn class_names(inputs: &[&str]) -> String {
    let classes: Vec<&str> = inputs
        .iter()
        .flat_map(|input| input.split_whitespace())
        .collect();

    let mut taken: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

    for class in classes.into_iter().rev() {
        let (variant, utility) = match class.rfind(':') {
            Some(i) => class.split_at(i + 1),
            None => ("", class),
        };

        let Some((group, covers)) = group(utility) else {
            kept.push(class);
            continue;
        };

        if !taken.insert(format!("{variant}{group}")) {
            continue;
        }

        taken.extend(covers.iter().map(|c| format!("{variant}{c}")));
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_padding_overrides_axes() {
        assert_eq!(class_names(&["px-2 py-2", "p-4"]), "p-4");
    }

    #[test]
    fn later_axis_only_overrides_its_axis() {
        assert_eq!(class_names(&["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(class_names(&["px-2 pl-4", "px-6"]), "px-6");
        assert_eq!(class_names(&["pl-4", "py-2"]), "pl-4 py-2");
    }

    #[test]
    fn margins_including_negative() {
        assert_eq!(class_names(&["-mt-2 mx-1", "m-4"]), "m-4");
    }

    #[test]
    fn text_size_align_and_color_are_separate_groups() {
        assert_eq!(
            class_names(&["text-sm text-center text-red-500", "text-lg"]),
            "text-center text-red-500 text-lg"
        );
        assert_eq!(
            class_names(&["text-red-500", "text-gray-700"]),
            "text-gray-700"
        );
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(
            class_names(&["hover:bg-red-500 bg-blue-500", "hover:bg-green-500"]),
            "bg-blue-500 hover:bg-green-500"
        );
    }

    #[test]
    fn display_font_and_unknown_classes() {
        assert_eq!(class_names(&["card block", "hidden"]), "card hidden");
        assert_eq!(
            class_names(&["font-bold font-sans", "font-normal"]),
            "font-sans font-normal"
        );
        assert_eq!(class_names(&["", "  ", "badge"]), "badge");
    }

    #[test]
    fn rounded_border_shadow_and_gap() {
        assert_eq!(
            class_names(&["rounded border border-gray-200 shadow", "rounded-lg border-2 shadow-none"]),
            "border-gray-200 rounded-lg border-2 shadow-none"
        );
        assert_eq!(class_names(&["gap-x-2 gap-y-4", "gap-2"]), "gap-2");
    }
}
