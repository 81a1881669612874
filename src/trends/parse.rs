use indexmap::IndexMap;

/// Occurrences per tag, in order of first appearance.
pub type TagCounts = IndexMap<String, u64>;

const TAG_COLUMN: usize = 1;

/// Count tag occurrences in comma-separated text.
///
/// The first line is a header and is skipped. The tag is the second field
/// of each row; rows without one, or with a blank one, are ignored. Fields
/// are split on every comma, quoting is not understood.
pub fn count_tags(raw: &str) -> TagCounts {
	let mut counts = TagCounts::new();
	for line in raw.split('\n').skip(1) {
		if let Some(tag) = tag_of(line) {
			*counts.entry(tag.to_string()).or_default() += 1;
		}
	}
	counts
}

fn tag_of(line: &str) -> Option<&str> {
	let tag = line.split(',').nth(TAG_COLUMN)?.trim();
	(!tag.is_empty()).then_some(tag)
}

/// The `n` most frequent tags, most frequent first.
///
/// Ties keep their order of first appearance.
pub fn top_tags(counts: &TagCounts, n: usize) -> Vec<(&str, u64)> {
	let mut ranked: Vec<_> = counts
		.iter()
		.map(|(tag, &count)| (tag.as_str(), count))
		.collect();
	ranked.sort_by(|a, b| b.1.cmp(&a.1));
	ranked.truncate(n);
	ranked
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_second_column() {
		let counts = count_tags("id,tag\n1,Python\n2,Python\n3,JavaScript\n");
		assert_eq!(counts.len(), 2);
		assert_eq!(counts["Python"], 2);
		assert_eq!(counts["JavaScript"], 1);
	}

	#[test]
	fn header_only_and_empty_input() {
		assert!(count_tags("").is_empty());
		assert!(count_tags("id,tag").is_empty());
		assert!(count_tags("id,tag\n").is_empty());
	}

	#[test]
	fn skips_rows_without_tag() {
		let counts = count_tags("id,tag\n1,\n2\n\n3,   \n4,Rust\n");
		assert_eq!(counts.len(), 1);
		assert_eq!(counts["Rust"], 1);
	}

	#[test]
	fn trims_whitespace_and_carriage_returns() {
		let counts = count_tags("id,tag\r\n1, Go \r\n2,Go\r\n");
		assert_eq!(counts["Go"], 2);
	}

	#[test]
	fn ignores_trailing_columns() {
		let counts = count_tags("id,tag,score\n1,SQL,4\n2,SQL,9\n");
		assert_eq!(counts["SQL"], 2);
	}

	#[test]
	fn quoted_commas_are_not_understood() {
		// Tags containing commas are out of scope: the field is cut at the comma.
		let counts = count_tags("id,tag\n1,\"C, C++\"\n");
		assert_eq!(counts.keys().collect::<Vec<_>>(), ["\"C"]);
	}

	#[test]
	fn tags_are_case_sensitive() {
		let counts = count_tags("id,tag\n1,rust\n2,Rust\n");
		assert_eq!(counts.len(), 2);
	}

	#[test]
	fn top_tags_sorted_and_truncated() {
		let counts = count_tags("id,tag\n1,a\n2,b\n3,b\n4,c\n5,c\n6,c\n7,d\n");
		let top = top_tags(&counts, 3);
		assert_eq!(top, vec![("c", 3), ("b", 2), ("a", 1)]);
	}

	#[test]
	fn top_tags_ties_keep_first_appearance() {
		let counts = count_tags("id,tag\n1,z\n2,y\n3,x\n4,y\n5,z\n6,x\n");
		let top = top_tags(&counts, 10);
		assert_eq!(top, vec![("z", 2), ("y", 2), ("x", 2)]);
	}
}
