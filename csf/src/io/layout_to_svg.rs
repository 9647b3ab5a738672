use crate::io::svg_util::{self, SvgDrawOptions};
use cumulus::entities::{CloudInstance, Layout, Placement, Rotation};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

pub fn layout_to_svg(
    layout: &Layout,
    instance: &CloudInstance,
    options: &SvgDrawOptions,
    font_family: &str,
) -> Document {
    let canvas = layout.canvas;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", canvas.width)
        .set("height", canvas.height)
        .set("fill", options.background.as_str());

    let mut words_group = Group::new().set("id", "words");
    for p in layout.placements.values() {
        let label = instance.label(p.label_id);
        let title = Title::new(format!("{}, weight: {}", label.text, label.weight));

        let text = Text::new(label.text.clone())
            .set("transform", transform_to_svg(p))
            .set("font-family", font_family)
            .set("font-size", p.font_size)
            .set("fill", svg_util::word_color(&label.text))
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .add(title);

        words_group = words_group.add(text);
    }

    let boxes_group = match options.placement_boxes {
        false => None,
        true => {
            let mut group = Group::new().set("id", "placement_boxes");
            for p in layout.placements.values() {
                group = group.add(
                    Rectangle::new()
                        .set("x", p.bbox.x_min)
                        .set("y", p.bbox.y_min)
                        .set("width", p.bbox.width())
                        .set("height", p.bbox.height())
                        .set("fill", "none")
                        .set("stroke", "#CCCCCC")
                        .set("stroke-width", 0.5),
                );
            }
            Some(group)
        }
    };

    let document = Document::new()
        .set("viewBox", (0.0, 0.0, canvas.width, canvas.height))
        .add(background)
        .add(words_group);

    match boxes_group {
        Some(group) => document.add(group),
        None => document,
    }
}

fn transform_to_svg(p: &Placement) -> String {
    //https://developer.mozilla.org/en-US/docs/Web/SVG/Attribute/transform
    //operations are effectively applied from right to left
    let c = p.bbox.centroid();
    let r = match p.rotation {
        Rotation::Horizontal => 0,
        Rotation::Vertical => 270,
    };
    format!("translate({} {}), rotate({r})", c.x(), c.y())
}
