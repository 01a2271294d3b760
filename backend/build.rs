use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .expect("copy frontend bundle");
    } else {
        // `include_dir!` needs the directory even when the bundle was not built.
        fs::create_dir_all(&embedded_dir).expect("create empty bundle dir");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
