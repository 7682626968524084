mod test_ranking;
mod test_search;
mod test_snippets;
