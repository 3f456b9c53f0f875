fn main() {
    #[cfg(windows)]
    {
        let version = env!("CARGO_PKG_VERSION");

        let mut res = winresource::WindowsResource::new();
        res.set("ProductName", "Modern Window");
        res.set("FileDescription", env!("CARGO_PKG_DESCRIPTION"));
        res.set("InternalName", "ModernWindow.Demo");
        res.set("OriginalFilename", "ModernWindow_Demo.exe");
        res.set("ProductVersion", version);
        res.set("FileVersion", version);

        if let Err(e) = res.compile() {
            println!("cargo:warning=Failed to compile Windows resources: {}", e);
        }
    }
}
