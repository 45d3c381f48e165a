/*!
# Dense Vertex Indices

Labels are interned once per graph build; afterwards every algorithm works on
dense indices `0..n` in canonical label order. We choose `Node = u32` as
almost all use-cases involve less than `2^32` vertices, which saves space
compared to `usize/u64` and lets us manipulate index values directly.
*/

use stream_bitset::bitset::BitSetImpl;

/// Dense vertex index, `0..n` in canonical label order
pub type Node = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// We limit the number of edge lines to `2^32 - 1`
pub type NumEdges = u32;

/// BitSet over dense vertex indices
pub type NodeBitSet = BitSetImpl<Node>;
