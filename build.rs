fn main() {
    // cfg.toml が変わったら toml-cfg の定数を再生成する
    println!("cargo:rerun-if-changed=cfg.toml");

    #[cfg(feature = "esp")]
    embuild::espidf::sysenv::output();
}
