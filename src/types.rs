use rustc_hash::FxHashMap;

pub type HashMap<K, V> = FxHashMap<K, V>;
