use log::*;

use std::path::PathBuf;
use structopt::StructOpt;

use fahrweg::enrich::{enrich_route_graph, SectionAttributeTable};
use fahrweg::raw_scenario;
use fahrweg::render;
use fahrweg::route_graph::generate_route_graphs;
use fahrweg::scenario::convert_raw;
use fahrweg::translate::{Direction, TranslationTable};

#[derive(Debug, StructOpt)]
#[structopt(name = "fahrweg", about = "Route-graph builder for rail scheduling scenarios.")]
struct Opt {
    /// Scenario instance
    #[structopt(name = "FILE")]
    #[structopt(parse(from_os_str))]
    file: PathBuf,

    /// Write one Graphviz dot file per route graph into this directory.
    #[structopt(short)]
    #[structopt(parse(from_os_str))]
    dotoutputdir: Option<PathBuf>,

    /// Merge the full section attributes into the built edges.
    #[structopt(long)]
    enrich: bool,

    /// Translate the scenario keys instead of building graphs.
    /// Allowed are "GER->ENG" and "ENG->GER".
    #[structopt(long)]
    translate: Option<Direction>,

    /// Activate debug mode
    #[structopt(short, long)]
    verbose: bool,
}

fn main() {
    let _h1 = hprof::enter("init");

    let opt = Opt::from_args();
    let level = if opt.verbose {
        if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    } else {
        LevelFilter::Error
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .unwrap();
    info!("{:#?}", opt);
    drop(_h1);

    let json_contents = {
        let _h = hprof::enter("read file");
        trace!("Loading file {}", opt.file.to_str().unwrap());
        std::fs::read_to_string(&opt.file).unwrap()
    };

    if let Some(direction) = opt.translate {
        {
            let _h = hprof::enter("translate");
            let value: serde_json::Value = serde_json::from_str(&json_contents).unwrap();
            let table = TranslationTable::new();
            let translated = table.translate(direction, &value);

            let suffix = match direction {
                Direction::GerToEng => "_eng",
                Direction::EngToGer => "_ger",
            };
            let stem = opt.file.file_stem().and_then(|s| s.to_str()).unwrap();
            let extension = opt.file.extension().and_then(|s| s.to_str()).unwrap_or("json");
            let out_file = opt.file.with_file_name(format!("{}{}.{}", stem, suffix, extension));
            std::fs::write(&out_file, serde_json::to_string_pretty(&translated).unwrap()).unwrap();
            info!("Wrote file {}", out_file.display());
        }

        hprof::end_frame();
        hprof::profiler().print_timing();
        return;
    }

    let scenario = {
        let _h = hprof::enter("parse");
        let raw: raw_scenario::Scenario = serde_json::from_str(&json_contents).unwrap();
        trace!(
            "Converting scenario with {} routes",
            raw.routes.as_ref().map(|r| r.len()).unwrap_or(0)
        );
        convert_raw(&raw).unwrap()
    };

    let mut graphs = {
        let _h = hprof::enter("build");
        generate_route_graphs(&scenario)
    };

    if opt.enrich {
        let _h = hprof::enter("enrich");
        let table = SectionAttributeTable::from_scenario(&scenario);
        for (_, graph) in graphs.iter_mut() {
            enrich_route_graph(graph, &table).unwrap();
        }
    }

    let mut ordered = graphs.iter().collect::<Vec<_>>();
    ordered.sort_by_key(|(id, _)| (*id).clone());

    if let Some(dir) = opt.dotoutputdir {
        let _h = hprof::enter("write graphs");
        std::fs::create_dir_all(&dir).unwrap();
        for (id, graph) in ordered {
            let out_file = dir.join(format!("graph-{}.dot", id));
            std::fs::write(&out_file, render::dot_string(graph)).unwrap();
            info!("Wrote graph file {}", out_file.display());
        }
    } else {
        for (id, graph) in ordered {
            info!(
                "Route {}: {} nodes, {} edges",
                id,
                graph.node_count(),
                graph.edge_count()
            );
        }
    }

    hprof::end_frame();
    hprof::profiler().print_timing();
}
