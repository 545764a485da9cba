use plotters::prelude::*;
use voroplane::sites::random_sites;
use voroplane::{BoundingBox, VoronoiDiagram};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let area = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
    let sites = random_sites(200, &area, 7);

    let diagram = VoronoiDiagram::build(&sites)?;
    render(&diagram, "diagram.svg")?;

    // A few Lloyd steps spread the sites out
    let mut relaxed = diagram.relaxed_sites();
    for _ in 0..4 {
        relaxed = VoronoiDiagram::build(&relaxed)?.relaxed_sites();
    }
    render(&VoronoiDiagram::build(&relaxed)?, "diagram_relaxed.svg")?;

    Ok(())
}

fn render(diagram: &VoronoiDiagram, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let b = diagram.bounds();
    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(b.min_x..b.max_x, b.min_y..b.max_y)?;

    // Cells
    for (i, (_, cell)) in diagram.iter_cells().enumerate() {
        if cell.len() < 3 {
            continue;
        }
        let poly: Vec<(f64, f64)> = cell.vertices().iter().map(|p| (p.x, p.y)).collect();
        let color = Palette99::pick(i).mix(0.3);
        chart.draw_series(std::iter::once(Polygon::new(poly, color.filled())))?;
    }

    // Ridges, each drawn once
    chart.draw_series(diagram.segments().iter().map(|s| {
        PathElement::new(vec![(s.start.x, s.start.y), (s.end.x, s.end.y)], BLACK.mix(0.7))
    }))?;

    // Sites
    chart.draw_series(diagram.sites().iter().map(|&p| Circle::new((p.x, p.y), 2, RED.filled())))?;

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}
