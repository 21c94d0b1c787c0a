//! Integration tests using graph fixtures
//!
//! Each JSON file in testdata/graphs/ gets one hyperbolic and one Euclidean test
//! function. The SVG output is parsed back and checked structurally.
//! Run all tests with: cargo test

use std::fs;
use std::path::PathBuf;

use h2svg::generators::erdos_renyi;
use h2svg::{
    render_graph_svg, Graph, GraphRenderer, PanZoom, PathDescriptor, PhyllotaxisLayout,
    Projection, RenderOptions, StaticHost, SvgRenderOptions,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZE: f64 = 600.0;

/// Get the path to the graph fixture directory
fn get_graphs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/graphs")
}

fn load_graph(test_name: &str) -> Graph {
    let file = get_graphs_dir().join(format!("{}.json", test_name));
    let content =
        fs::read_to_string(&file).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", file, e));
    Graph::from_json(&content).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", file, e))
}

fn options(projection: Projection) -> SvgRenderOptions {
    SvgRenderOptions {
        render: RenderOptions {
            projection: Some(projection),
            edge_thickness: Some(1.5),
        },
        size: SIZE,
        ..Default::default()
    }
}

fn num(node: &roxmltree::Node, attr: &str) -> f64 {
    let text = node
        .attribute(attr)
        .unwrap_or_else(|| panic!("<{}> without {}", node.tag_name().name(), attr));
    text.parse()
        .unwrap_or_else(|_| panic!("{}={:?} is not a number", attr, text))
}

/// Every number in a path's `d` attribute.
fn path_numbers(d: &str) -> Vec<f64> {
    d.split_whitespace()
        .filter(|t| !matches!(*t, "M" | "A" | "L"))
        .map(|t| t.parse().unwrap_or_else(|_| panic!("bad path token {:?} in {:?}", t, d)))
        .collect()
}

fn elements<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    tag: &'a str,
    class: &'a str,
) -> Vec<roxmltree::Node<'a, 'input>> {
    doc.descendants()
        .filter(|n| n.tag_name().name() == tag && n.attribute("class") == Some(class))
        .collect()
}

/// Render one fixture and check the SVG structure
fn run_graph_test(test_name: &str, projection: Projection) {
    let graph = load_graph(test_name);
    let svg = render_graph_svg(graph.clone(), &options(projection))
        .unwrap_or_else(|e| panic!("Failed to render {}: {}", test_name, e));
    let doc = roxmltree::Document::parse(&svg)
        .unwrap_or_else(|e| panic!("Invalid SVG for {}: {}\n{}", test_name, e, svg));

    let nodes = elements(&doc, "circle", "node");
    let links = elements(&doc, "path", "link");
    assert_eq!(nodes.len(), graph.nodes.len(), "node count for {}", test_name);
    assert_eq!(links.len(), graph.edges.len(), "edge count for {}", test_name);

    for (drawn, node) in nodes.iter().zip(&graph.nodes) {
        assert_eq!(drawn.attribute("data-id"), Some(node.id.as_str()));
    }
    for link in &links {
        let d = link.attribute("d").unwrap_or_default();
        let numbers = path_numbers(d);
        assert!(numbers.len() == 4 || numbers.len() == 9, "unexpected path {:?}", d);
        assert!(numbers.iter().all(|n| n.is_finite()), "non-finite path {:?}", d);
    }

    match projection {
        Projection::Hyperbolic => {
            let disk = elements(&doc, "circle", "background");
            assert_eq!(disk.len(), 1);
            let (cx, cy, r) = (num(&disk[0], "cx"), num(&disk[0], "cy"), num(&disk[0], "r"));
            assert_eq!((cx, cy, r), (SIZE / 2.0, SIZE / 2.0, SIZE / 2.0));
            for node in &nodes {
                let (x, y, nr) = (num(node, "cx"), num(node, "cy"), num(node, "r"));
                assert!(nr > 0.0);
                let reach = (x - cx).hypot(y - cy) + nr;
                assert!(reach <= r + 0.01, "{} node escapes the disk: {}", test_name, reach);
            }
        }
        Projection::Euclidean => {
            assert_eq!(elements(&doc, "rect", "background").len(), 1);
            assert!(elements(&doc, "circle", "background").is_empty());
            for node in &nodes {
                assert_eq!(num(node, "r"), 10.0);
                assert!(num(node, "cx").is_finite() && num(node, "cy").is_finite());
            }
            for link in &links {
                assert!(link.attribute("d").unwrap_or_default().contains(" L "));
            }
        }
    }
}

/// Macro to generate hyperbolic test functions
macro_rules! svg_test {
    ($name:ident) => {
        #[test]
        fn $name() {
            run_graph_test(stringify!($name), Projection::Hyperbolic);
        }
    };
}

/// Macro to generate Euclidean test functions
macro_rules! euclidean_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<euclidean_ $name>]() {
                run_graph_test(stringify!($name), Projection::Euclidean);
            }
        }
    };
}

// =============================================================================
// Hyperbolic fixtures
// =============================================================================

svg_test!(single_node);
svg_test!(two_nodes);
svg_test!(triangle);
svg_test!(star);
svg_test!(path_five);
svg_test!(string_ids);
svg_test!(preset_positions);

// =============================================================================
// Euclidean fixtures
// =============================================================================

euclidean_test!(single_node);
euclidean_test!(two_nodes);
euclidean_test!(triangle);
euclidean_test!(star);
euclidean_test!(path_five);
euclidean_test!(string_ids);
euclidean_test!(preset_positions);

// =============================================================================
// Renderer scenarios
// =============================================================================

#[test]
fn two_node_edge_becomes_an_arc_after_panning() {
    let mut renderer = GraphRenderer::new();
    renderer
        .attach_canvas(&StaticHost::single(400.0, 400.0), "#render", None)
        .unwrap();
    renderer.set_graph(load_graph("two_nodes")).unwrap();
    renderer.render(&mut PhyllotaxisLayout).unwrap();

    for id in ["1", "2"] {
        let node = renderer.node_geometry(&id.into()).unwrap();
        assert!(node.circle.radius > 0.0, "node {} has no circle", id);
    }
    let before = renderer.edge_geometry(0).unwrap().path;
    assert!((before.end() - before.start()).norm() > 0.0);

    let frame = renderer.pan_zoom(PanZoom::translate(-25.0, 40.0)).unwrap();
    let edge = renderer.edge_geometry(0).unwrap();
    assert!(edge.arc().map_or(false, |arc| arc.radius > 0.0));
    assert!(matches!(frame.edges[0].path, PathDescriptor::Arc { .. }));
}

#[test]
fn random_graph_renders_inside_the_disk() {
    let mut rng = StdRng::seed_from_u64(2024);
    let graph = erdos_renyi(40, 0.1, &mut rng).unwrap();
    let edges = graph.edges.len();
    let svg = render_graph_svg(graph, &options(Projection::Hyperbolic)).unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(elements(&doc, "circle", "node").len(), 40);
    assert_eq!(elements(&doc, "path", "link").len(), edges);
}

#[test]
fn frame_serializes_to_json() {
    let mut renderer = GraphRenderer::new();
    renderer
        .configure_json(&serde_json::json!({"projection": "Euclidean", "edgeThickness": 3}))
        .unwrap();
    renderer
        .attach_canvas(&StaticHost::single(300.0, 200.0), "#render", None)
        .unwrap();
    renderer.set_graph(load_graph("triangle")).unwrap();
    let frame = renderer.render(&mut PhyllotaxisLayout).unwrap();

    let value = serde_json::to_value(&frame).unwrap();
    assert_eq!(value["projection"], "euclidean");
    assert_eq!(value["edgeThickness"], 3.0);
    assert_eq!(value["background"]["kind"], "plot");
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["edges"][0]["path"]["kind"], "line");
    assert_eq!(value["edges"][0]["source"], "a");
}
