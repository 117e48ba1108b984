use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mapgraph::{
    algorithm::GreedyColoring,
    graph::{AdjacentMapGraph, Direction, EdgeId, VertexId},
};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, directed, undirected);
criterion_main!(benches);

fn directed(c: &mut Criterion) {
    cases(c, "directed", true);
}

fn undirected(c: &mut Criterion) {
    cases(c, "undirected", false);
}

fn cases(c: &mut Criterion, prefix: &str, directed: bool) {
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    c.bench_function(&(prefix.to_string() + "/add_vertex"), |b| {
        b.iter(|| add_vertices(directed, vertex_size))
    });
    c.bench_function(&(prefix.to_string() + "/add_vertex and add_edge"), |b| {
        b.iter(|| add_vertices_and_edges(directed, vertex_size, edge_size))
    });

    let (g, vertices, edges) = build(directed, vertex_size, edge_size);
    c.bench_function(&(prefix.to_string() + "/adjacent"), |b| {
        b.iter(|| adjacent(&g, &vertices))
    });
    c.bench_function(&(prefix.to_string() + "/neighbors"), |b| {
        b.iter(|| neighbors(&g, &vertices))
    });
    c.bench_function(&(prefix.to_string() + "/greedy_vertex_coloring"), |b| {
        let mut g = g.clone();
        b.iter(|| black_box(g.greedy_vertex_coloring()))
    });
    c.bench_function(&(prefix.to_string() + "/greedy_edge_coloring"), |b| {
        let mut g = g.clone();
        b.iter(|| black_box(g.greedy_edge_coloring()))
    });
    c.bench_function(&(prefix.to_string() + "/remove_edges"), |b| {
        let mut g = g.clone();
        b.iter(|| remove_edges(&mut g, &edges))
    });
    c.bench_function(&(prefix.to_string() + "/remove_vertices"), |b| {
        let mut g = g.clone();
        b.iter(|| remove_vertices(&mut g, &vertices))
    });
}

fn build(
    directed: bool,
    vertex_size: usize,
    edge_size: usize,
) -> (AdjacentMapGraph<usize>, Vec<VertexId>, Vec<EdgeId>) {
    let mut g = AdjacentMapGraph::new(directed);
    let mut vertices = vec![];
    for i in 0..vertex_size {
        vertices.push(g.add_vertex(Some(i)));
    }
    let mut edges = vec![];
    for _ in 0..edge_size {
        let v0 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        let v1 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        if let Ok(eid) = g.add_edge(v0, v1, None) {
            edges.push(eid);
        }
    }
    (g, vertices, edges)
}

fn add_vertices(directed: bool, vertex_size: usize) {
    let mut g: AdjacentMapGraph<usize> = AdjacentMapGraph::new(directed);
    for i in 0..vertex_size {
        let _ = g.add_vertex(Some(i));
    }
}

fn add_vertices_and_edges(directed: bool, vertex_size: usize, edge_size: usize) {
    let mut g = AdjacentMapGraph::new(directed);
    let mut vertices = vec![];
    for i in 0..vertex_size {
        vertices.push(g.add_vertex(Some(i)));
    }
    for _ in 0..edge_size {
        let v0 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        let v1 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        let _ = g.add_edge(v0, v1, None);
    }
}

fn adjacent(g: &AdjacentMapGraph<usize>, vertices: &[VertexId]) {
    let v0 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
    let v1 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
    black_box(g.adjacent(&v0, &v1, Direction::Outgoing).map(|e| e.id()));
}

fn neighbors(g: &AdjacentMapGraph<usize>, vertices: &[VertexId]) {
    let v = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
    for n in g.neighbors(&v, Direction::Outgoing) {
        black_box(n.to_raw());
    }
}

fn remove_edges(g: &mut AdjacentMapGraph<usize>, edges: &[EdgeId]) {
    for e in edges {
        let _ = g.remove_edge(e);
    }
}

fn remove_vertices(g: &mut AdjacentMapGraph<usize>, vertices: &[VertexId]) {
    for v in vertices {
        let _ = black_box(g.remove_vertex(v));
    }
}
