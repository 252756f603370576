use roxmltree::Document;

use crate::MapError;

/// One `<path id=..>` of the map drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSource {
    pub code: String,
    pub d: String,
    pub transform: Option<String>,
}

/// The parts of the vector map the view needs to redraw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapAsset {
    pub view_box: String,
    pub shapes: Vec<ShapeSource>,
}

impl MapAsset {
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().map(|shape| shape.code.as_str())
    }
}

fn unavailable(reason: impl Into<String>) -> MapError {
    MapError::MapAssetUnavailable(reason.into())
}

/// Every `transform` from the outermost element down to `node`, so the shape
/// keeps its place once lifted out of its groups.
fn effective_transform(node: roxmltree::Node<'_, '_>) -> Option<String> {
    let mut parts: Vec<&str> = node
        .ancestors()
        .filter_map(|n| n.attribute("transform"))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }
    parts.reverse();
    Some(parts.join(" "))
}

/// Parse the SVG text of the map into its view box and region shapes.
pub fn parse_map_asset(svg: &str) -> Result<MapAsset, MapError> {
    let doc = Document::parse(svg).map_err(|e| unavailable(format!("invalid svg: {e}")))?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(unavailable(format!(
            "expected <svg> root, found <{}>",
            root.tag_name().name()
        )));
    }

    let view_box = match root.attribute("viewBox") {
        Some(view_box) => view_box.trim().to_string(),
        None => {
            let dimension = |name: &str| {
                root.attribute(name)
                    .map(|value| value.trim_end_matches("px"))
                    .and_then(|value| value.parse::<f64>().ok())
            };
            match (dimension("width"), dimension("height")) {
                (Some(w), Some(h)) => format!("0 0 {w} {h}"),
                _ => return Err(unavailable("svg has neither viewBox nor width/height")),
            }
        }
    };

    let shapes: Vec<ShapeSource> = root
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "path")
        .filter_map(|node| {
            let code = node.attribute("id")?.trim();
            let d = node.attribute("d")?;
            (!code.is_empty()).then(|| ShapeSource {
                code: code.to_string(),
                d: d.to_string(),
                transform: effective_transform(node),
            })
        })
        .collect();

    if shapes.is_empty() {
        return Err(unavailable("svg contains no region shapes"));
    }
    Ok(MapAsset { view_box, shapes })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 959 593">
  <g class="states">
    <path id="CA" d="M 10 10 L 60 10 L 60 90 Z"/>
    <path id="NV" d="M 60 10 L 110 10 L 110 70 Z" transform="translate(1 2)"/>
    <path d="M 0 0 L 1 1"/>
  </g>
  <circle id="DC" cx="800" cy="200" r="5"/>
</svg>"#;

    #[test]
    fn parses_view_box_and_identified_paths() {
        let asset = parse_map_asset(SAMPLE).unwrap();
        assert_eq!(asset.view_box, "0 0 959 593");
        assert_eq!(asset.codes().collect::<Vec<_>>(), vec!["CA", "NV"]);
        assert_eq!(asset.shapes[1].transform.as_deref(), Some("translate(1 2)"));
        assert_eq!(asset.shapes[0].transform, None);
    }

    #[test]
    fn group_transforms_fold_into_the_shape() {
        let svg = r#"<svg viewBox="0 0 959 593">
  <g transform="translate(100 50) scale(0.5)">
    <path id="CA" d="M0 0 L10 10"/>
    <g transform="rotate(5)"><path id="HI" d="M0 0 L4 4" transform="translate(2 3)"/></g>
  </g>
  <path id="TX" d="M0 0"/>
</svg>"#;
        let asset = parse_map_asset(svg).unwrap();
        let transforms: Vec<_> = asset
            .shapes
            .iter()
            .map(|shape| (shape.code.as_str(), shape.transform.as_deref()))
            .collect();
        assert_eq!(
            transforms,
            vec![
                ("CA", Some("translate(100 50) scale(0.5)")),
                ("HI", Some("translate(100 50) scale(0.5) rotate(5) translate(2 3)")),
                ("TX", None),
            ]
        );
    }

    #[test]
    fn falls_back_to_width_and_height() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="959px" height="593"><path id="TX" d="M0 0"/></svg>"#;
        assert_eq!(parse_map_asset(svg).unwrap().view_box, "0 0 959 593");
    }

    #[test]
    fn malformed_svg_is_unavailable() {
        assert!(matches!(
            parse_map_asset("<svg><path id=\"CA\""),
            Err(MapError::MapAssetUnavailable(_))
        ));
        assert!(matches!(
            parse_map_asset("<html></html>"),
            Err(MapError::MapAssetUnavailable(_))
        ));
    }

    #[test]
    fn svg_without_shapes_is_unavailable() {
        let svg = r#"<svg viewBox="0 0 10 10"><rect width="10" height="10"/></svg>"#;
        assert_eq!(
            parse_map_asset(svg),
            Err(MapError::MapAssetUnavailable(
                "svg contains no region shapes".into()
            ))
        );
    }
}
