use crate::index::Index;

/// Display index statistics
pub fn show_stats(index: &Index) {
    let stats = index.stats();

    println!("Index Statistics");
    println!("================");
    println!();
    match &stats.source {
        Some(path) => println!("Corpus:           {}", path.display()),
        None => println!("Corpus:           <memory>"),
    }
    println!("Storage:          {}", if stats.mapped { "memory-mapped" } else { "owned" });
    println!("Text size:        {}", format_size(stats.text_size as u64));
    println!("Suffix count:     {}", stats.suffix_count);
    println!("Valid UTF-8:      {}", if stats.valid_utf8 { "yes" } else { "no" });
    println!("Memory (approx):  {}", format_size(stats.memory_bytes() as u64));
    println!("Build time:       {:.1} ms", stats.build_time.as_secs_f64() * 1000.0);
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.50 MB");
    }
}
