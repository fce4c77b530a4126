use std::collections::HashMap;

/// Sequences at least this long get their most common elements dropped from
/// the match index, mirroring the popular-element heuristic of Ratcliff/Obershelp
/// implementations.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Ratcliff/Obershelp similarity between two strings, compared by `char`.
///
/// `a` is the candidate and `b` the query; the index is built over `b`.
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, ch) in b.iter().enumerate() {
            b2j.entry(*ch).or_default().push(j);
        }

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, idxs| idxs.len() <= ntest);
        }

        SequenceMatcher { a, b, b2j }
    }

    /// Longest common block inside `a[alo..ahi]` x `b[blo..bhi]`, as
    /// `(i, j, size)`. Earliest `i`, then earliest `j`, wins among equals.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(idxs) = self.b2j.get(&self.a[i]) {
                for &j in idxs {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Grow the block over elements the index skipped (popular ones).
        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        (besti, bestj, bestsize)
    }

    /// Total number of elements covered by the matching blocks.
    pub fn matching_len(&self) -> usize {
        let mut total = 0usize;
        let mut queue: Vec<(usize, usize, usize, usize)> = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }

    fn total_len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    /// `2 * M / T`, in `[0, 1]`. Two empty strings are identical.
    pub fn ratio(&self) -> f64 {
        calculate_ratio(self.matching_len(), self.total_len())
    }

    /// Upper bound on `ratio()` from shared character counts alone.
    pub fn quick_ratio(&self) -> f64 {
        let mut avail: HashMap<char, isize> = HashMap::new();
        for ch in &self.b {
            *avail.entry(*ch).or_insert(0) += 1;
        }

        let mut matches = 0usize;
        for ch in &self.a {
            let left = avail.entry(*ch).or_insert(0);
            if *left > 0 {
                matches += 1;
            }
            *left -= 1;
        }

        calculate_ratio(matches, self.total_len())
    }

    /// Upper bound on `ratio()` from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        calculate_ratio(self.a.len().min(self.b.len()), self.total_len())
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// Similarity of `candidate` to `query`, or `None` when it cannot reach
/// `cutoff`. The two cheap bounds run first so most candidates skip the
/// block alignment.
pub fn similarity_at_least(candidate: &str, query: &str, cutoff: f64) -> Option<f64> {
    let matcher = SequenceMatcher::new(candidate, query);
    if matcher.real_quick_ratio() < cutoff || matcher.quick_ratio() < cutoff {
        return None;
    }
    let score = matcher.ratio();
    (score >= cutoff).then_some(score)
}
