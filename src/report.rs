//! Textual and JSON snapshots of the heap layout.
//!
//! Both emitters are plain formatted I/O over the public block census
//! ([`Heap::blocks()`]): a line-oriented dump for humans and a strict-JSON
//! document for tooling. Neither touches the status channel; I/O failures
//! surface as [`io::Error`] for the caller to handle.

use crate::heap::Heap;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// One chain entry of the JSON document.
#[derive(Serialize)]
struct LayoutRecord {
    block_index: usize,
    header_address: String,
    total_size: usize,
    data_size: usize,
    state: &'static str,
    next_block: String,
}

/// The `heap_stats` object of the JSON document.
#[derive(Serialize)]
struct StatsRecord {
    heap_size: usize,
    allocated_blocks: usize,
    free_blocks: usize,
    used_heap_size: usize,
    free_heap_size: usize,
    fragmentation_ratio: f64,
}

#[derive(Serialize)]
struct HeapReport {
    heap_layout: Vec<LayoutRecord>,
    heap_stats: StatsRecord,
}

impl<const N: usize> Heap<N> {
    /// Print the current heap layout to standard output.
    pub fn print_heap(&self) {
        let stdout = io::stdout();
        if let Err(error) = self.write_layout(stdout.lock()) {
            eprintln!("failed to print heap layout: {error}");
        }
    }

    /// Write the textual heap layout to the file at `path`.
    pub fn save_heap_state<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_layout(BufWriter::new(file))
    }

    /// Write the heap layout and statistics as a JSON document to `path`.
    pub fn export_heap_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.report())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    /// The text dump backing both `print_heap` and `save_heap_state`.
    fn write_layout<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "Heap Layout:")?;
        for block in self.blocks() {
            writeln!(writer, "Block {}:", block.index)?;
            writeln!(writer, "  Block Header Address: {:p}", block.header_address)?;
            writeln!(writer, "  Block Total Size: {} bytes", block.total_size)?;
            writeln!(writer, "  Block Data Size: {} bytes", block.payload_size)?;
            writeln!(
                writer,
                "  Block State: {}",
                if block.is_free { "Free" } else { "Allocated" }
            )?;
            writeln!(writer)?;
        }
        writeln!(writer, "End of Heap")?;
        writer.flush()
    }

    fn report(&self) -> HeapReport {
        let heap_layout = self
            .blocks()
            .map(|block| LayoutRecord {
                block_index: block.index,
                header_address: format!("{:p}", block.header_address),
                total_size: block.total_size,
                data_size: block.payload_size,
                state: if block.is_free { "Free" } else { "Allocated" },
                next_block: match block.next_address {
                    Some(next) => format!("{next:p}"),
                    None => "0x0".to_owned(),
                },
            })
            .collect();

        HeapReport {
            heap_layout,
            heap_stats: StatsRecord {
                heap_size: self.used(),
                allocated_blocks: self.alloc_count(),
                free_blocks: self.free_block_count(),
                used_heap_size: self.used_heap_size(),
                free_heap_size: self.free_heap_size(),
                fragmentation_ratio: round4(self.fragmentation_ratio()),
            },
        }
    }
}

/// Clamp the ratio to the four decimal places the report format promises.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
