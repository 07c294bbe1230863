use std::io::BufRead;

use crate::graph::{Edge, NodeId};

/// Starting capacity of the edge buffer; grows by doubling from here.
pub const INITIAL_EDGE_CAPACITY: usize = 1000;

/// Parse one edge-list line into an edge.
///
/// Lines that are empty or whose literal first byte is `#` are skipped.
/// Everything else is accepted leniently: spaces/tabs are skipped, then the
/// decimal digits of `origin`, then spaces/tabs, then the digits of
/// `destination`. A missing number reads as 0 and trailing bytes are ignored,
/// so `"7"` yields `7 -> 0` and `"  # note"` yields `0 -> 0`. A `\r` left by
/// CRLF input ends a number like any other byte; a bare `"\r"` is `0 -> 0`.
pub fn parse_line(line: &[u8]) -> Option<Edge> {
    match line.first() {
        None | Some(b'#') => return None,
        Some(_) => {}
    }

    let mut pos = 0;
    let origin = scan_number(line, &mut pos);
    let destination = scan_number(line, &mut pos);
    Some(Edge { origin, destination })
}

/// Skip spaces/tabs at `pos`, then accumulate a run of decimal digits.
fn scan_number(line: &[u8], pos: &mut usize) -> NodeId {
    while matches!(line.get(*pos), Some(b' ' | b'\t')) {
        *pos += 1;
    }
    let mut value: NodeId = 0;
    while let Some(&b) = line.get(*pos) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(NodeId::from(b - b'0'));
        *pos += 1;
    }
    value
}

/// Growable buffer of raw edges, filled before the CSR build.
///
/// Capacity starts at [`INITIAL_EDGE_CAPACITY`] and doubles when full; it is
/// never shrunk. The largest node id seen on either endpoint is tracked,
/// starting from 0, so the node count is known once ingestion ends and is at
/// least 1.
#[derive(Debug)]
pub struct EdgeBuffer {
    edges: Vec<Edge>,
    max_node_id: NodeId,
}

impl EdgeBuffer {
    pub fn new() -> Self {
        Self {
            edges: Vec::with_capacity(INITIAL_EDGE_CAPACITY),
            max_node_id: 0,
        }
    }

    /// Append an edge, doubling capacity when the buffer is full.
    pub fn push(&mut self, edge: Edge) {
        if self.edges.len() == self.edges.capacity() {
            let grow_by = self.edges.capacity().max(INITIAL_EDGE_CAPACITY);
            self.edges.reserve_exact(grow_by);
        }
        self.edges.push(edge);

        self.max_node_id = self.max_node_id.max(edge.origin).max(edge.destination);
    }

    /// Feed one raw line through [`parse_line`]. Returns whether an edge was accepted.
    pub fn push_line(&mut self, line: &[u8]) -> bool {
        match parse_line(line) {
            Some(edge) => {
                self.push(edge);
                true
            }
            None => false,
        }
    }

    /// Read every line of `reader`. Lines are split on `\n` and handled as
    /// raw bytes, so non-UTF-8 input is parsed leniently rather than rejected.
    /// Returns the number of edges accepted from this reader.
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<usize> {
        let mut line = Vec::with_capacity(64);
        let mut accepted = 0;
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let content = line.strip_suffix(b"\n").unwrap_or(&line);
            if self.push_line(content) {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    pub fn max_node_id(&self) -> NodeId {
        self.max_node_id
    }

    /// `max_node_id + 1`; 1 when nothing was ingested, since node 0 always exists.
    pub fn node_count(&self) -> usize {
        self.max_node_id as usize + 1
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.edges.capacity()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }
}

impl Default for EdgeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Edge> for EdgeBuffer {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.push(edge);
        }
    }
}

impl FromIterator<Edge> for EdgeBuffer {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(origin: NodeId, destination: NodeId) -> Edge {
        Edge { origin, destination }
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_line(b"0 1"), Some(e(0, 1)));
        assert_eq!(parse_line(b"12\t345"), Some(e(12, 345)));
    }

    #[test]
    fn test_parse_mixed_whitespace() {
        assert_eq!(parse_line(b" \t 4 \t\t 9"), Some(e(4, 9)));
    }

    #[test]
    fn test_parse_skips_empty_and_comment() {
        assert_eq!(parse_line(b""), None);
        assert_eq!(parse_line(b"# FromNodeId ToNodeId"), None);
        assert_eq!(parse_line(b"#c\r"), None);
    }

    #[test]
    fn test_parse_bare_carriage_return_is_an_edge() {
        // Neither empty nor '#': read as a line with both numbers missing.
        assert_eq!(parse_line(b"\r"), Some(e(0, 0)));
    }

    #[test]
    fn test_parse_indented_comment_is_not_skipped() {
        // Only the literal first byte is checked.
        assert_eq!(parse_line(b"  # note"), Some(e(0, 0)));
    }

    #[test]
    fn test_parse_missing_destination() {
        assert_eq!(parse_line(b"7"), Some(e(7, 0)));
        assert_eq!(parse_line(b"7   "), Some(e(7, 0)));
    }

    #[test]
    fn test_parse_ignores_trailing_data() {
        assert_eq!(parse_line(b"3 4 5 extra"), Some(e(3, 4)));
        assert_eq!(parse_line(b"3 4\r"), Some(e(3, 4)));
    }

    #[test]
    fn test_parse_no_sign_handling() {
        // '-' is neither whitespace nor a digit: both numbers read as 0.
        assert_eq!(parse_line(b"-5 6"), Some(e(0, 0)));
        assert_eq!(parse_line(b"abc"), Some(e(0, 0)));
    }

    #[test]
    fn test_buffer_tracks_max_node() {
        let mut buf = EdgeBuffer::new();
        assert_eq!(buf.max_node_id(), 0);
        assert_eq!(buf.node_count(), 1);
        buf.push(e(2, 9));
        buf.push(e(4, 1));
        assert_eq!(buf.max_node_id(), 9);
        assert_eq!(buf.node_count(), 10);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn test_buffer_grows_by_doubling() {
        let mut buf = EdgeBuffer::new();
        let initial = buf.capacity();
        assert!(initial >= INITIAL_EDGE_CAPACITY);
        for i in 0..=initial as NodeId {
            buf.push(e(i, i));
        }
        assert!(buf.capacity() >= 2 * initial);
        assert_eq!(buf.len(), initial + 1);
    }

    #[test]
    fn test_ingest_reader() {
        let text = "0 1\n1 2\n0 2\n# comment\n\n3 0";
        let mut buf = EdgeBuffer::new();
        let accepted = buf.ingest_reader(text.as_bytes()).unwrap();
        assert_eq!(accepted, 4);
        assert_eq!(buf.node_count(), 4);
        assert_eq!(buf.edges()[3], e(3, 0));
    }

    #[test]
    fn test_ingest_reader_crlf() {
        let text = "0 1\r\n\r\n#c\r\n2 0\r\n";
        let mut buf = EdgeBuffer::new();
        buf.ingest_reader(text.as_bytes()).unwrap();
        // The blank CRLF line is "\r", which is kept as 0 -> 0.
        assert_eq!(buf.edges(), &[e(0, 1), e(0, 0), e(2, 0)]);
    }

    #[test]
    fn test_ingest_reader_non_utf8() {
        let bytes: &[u8] = b"1 2\n\xff\xfe 3\n";
        let mut buf = EdgeBuffer::new();
        buf.ingest_reader(bytes).unwrap();
        assert_eq!(buf.edges(), &[e(1, 2), e(0, 0)]);
    }
}
