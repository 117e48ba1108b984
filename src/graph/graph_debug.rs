use crate::graph::*;

/// Renders a graph for inspection: one line per vertex, one indented line per
/// outgoing edge towards its opposite endpoint.
pub struct GraphDebug<'a, L> {
    graph: &'a AdjacentMapGraph<L>,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, L> GraphDebug<'a, L> {
    pub(crate) fn new(graph: &'a AdjacentMapGraph<L>) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, L> std::fmt::Debug for GraphDebug<'a, L>
where
    L: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for vert in self.graph.vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{}", vert)?;
            for e in self.graph.incident_edges(&vert.id(), Direction::Outgoing) {
                let other = match e.opposite(&vert.id()).and_then(|o| self.graph.vertex(&o)) {
                    Some(other) => other,
                    None => continue,
                };
                self.display_indent(f, 1)?;
                match e.label() {
                    Some(label) => writeln!(f, "--e{}({})-> {}", e.id().to_raw(), label, other)?,
                    None => writeln!(f, "--e{}-> {}", e.id().to_raw(), other)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn renders_vertices_and_out_edges() {
        let mut g = AdjacentMapGraph::new(true);
        let a = g.add_vertex(Some("A"));
        let b = g.add_vertex(None);
        g.add_edge(a, b, Some("road")).unwrap();
        g.add_edge(b, a, None).unwrap();

        let trial = format!("{:?}", g.debug());
        assert_eq!(trial, "A\n  --e0(road)-> v1\nv1\n  --e1-> A\n");

        let indented = format!("{:?}", g.debug().indent(4, 0));
        assert_eq!(indented, "    A\n    --e0(road)-> v1\n    v1\n    --e1-> A\n");
    }
}
